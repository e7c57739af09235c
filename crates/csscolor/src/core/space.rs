#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ColorError;

/// The enumeration of predefined color spaces.
///
/// # RGB
///
/// CSS Color 4 predefines several RGB color spaces. From smallest to largest
/// gamut, they are:
///
///   * [sRGB](https://en.wikipedia.org/wiki/SRGB), which has long served as the
///     default color space for the web, and its linear-light version;
///   * [Display P3](https://en.wikipedia.org/wiki/DCI-P3), which is
///     well-positioned to become sRGB's successor;
///   * [Adobe RGB (1998)](https://en.wikipedia.org/wiki/Adobe_RGB_color_space);
///   * [Rec. 2020](https://en.wikipedia.org/wiki/Rec._2020), the standard color
///     space for ultra-high-definition video;
///   * [ProPhoto RGB](https://en.wikipedia.org/wiki/ProPhoto_RGB_color_space),
///     which is the only RGB color space using the D50 white point.
///
/// For all of them, in-gamut coordinates range from 0 to 1, inclusive.
///
/// HSL and HWB are cylindrical transformations of sRGB. They share its gamut.
///
/// # Lab and LCh
///
/// CIELAB and its polar form CIELCh use the D50 white point. Oklab and Oklch
/// improve on them by being perceptually more uniform, notably around the
/// blues, and use the D65 white point. All four are unbounded, i.e., they can
/// model any color.
///
/// # XYZ
///
/// [XYZ](https://en.wikipedia.org/wiki/CIE_1931_color_space) serves as
/// foundational color space. Notably, all conversions between unrelated color
/// spaces go through XYZ, using the white point of the source color space.
/// When source and target color space disagree on white point, conversion
/// applies the (linear) Bradford chromatic adaptation.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "csscolor.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Srgb,
    SrgbLinear,
    DisplayP3,
    A98Rgb,
    ProphotoRgb,
    Rec2020,
    XyzD50,
    XyzD65,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Hsl,
    Hwb,
}

/// The kinds of color spaces.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "csscolor.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// A color space with red, green, and blue coordinates.
    Rgb,
    /// Hue, saturation, and lightness on top of sRGB.
    Hsl,
    /// Hue, whiteness, and blackness on top of sRGB.
    Hwb,
    /// Lightness and two Cartesian colorness axes.
    Lab,
    /// Lightness, chroma, and hue.
    Lch,
    /// CIE XYZ tristimulus values.
    Xyz,
}

/// A reference white point.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "csscolor.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WhitePoint {
    D50,
    D65,
}

impl WhitePoint {
    /// Get this white point's XYZ coordinates, with Y normalized to 1.
    ///
    /// D50 uses the tristimulus values from ICC profiles. D65 is derived from
    /// its chromaticity.
    #[allow(clippy::excessive_precision)]
    pub const fn xyz(&self) -> [f64; 3] {
        match *self {
            Self::D50 => [0.96422, 1.0, 0.82521],
            Self::D65 => [0.3127 / 0.3290, 1.0, (1.0 - 0.3127 - 0.3290) / 0.3290],
        }
    }
}

/// A color model, i.e., the CSS notation for a color value.
///
/// The model determines how a color value's components are interpreted and
/// serialized. It is related to but not the same as a color space: For
/// example, the same sRGB coordinates can be written with `rgb()` or with
/// `color(srgb ...)`.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "csscolor.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Xyz,
    ColorFunction,
}

impl ColorModel {
    /// Determine whether this model accepts custom color spaces.
    pub const fn accepts_custom(&self) -> bool {
        matches!(*self, Self::ColorFunction)
    }

    /// Get the name of this model's CSS function.
    pub const fn function_name(&self) -> &'static str {
        match *self {
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hwb => "hwb",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Xyz | Self::ColorFunction => "color",
        }
    }
}

impl std::fmt::Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match *self {
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Hwb => "HWB",
            Self::Lab => "Lab",
            Self::Lch => "LCh",
            Self::Xyz => "XYZ",
            Self::ColorFunction => "color()",
        };

        f.write_str(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

const COLOR_SPACES: [(&str, ColorSpace); 17] = [
    ("srgb", ColorSpace::Srgb),
    ("srgb-linear", ColorSpace::SrgbLinear),
    ("display-p3", ColorSpace::DisplayP3),
    ("a98-rgb", ColorSpace::A98Rgb),
    ("prophoto-rgb", ColorSpace::ProphotoRgb),
    ("rec2020", ColorSpace::Rec2020),
    ("xyz-d50", ColorSpace::XyzD50),
    ("xyz-d65", ColorSpace::XyzD65),
    ("xyz", ColorSpace::XyzD65),
    ("lab", ColorSpace::Lab),
    ("lch", ColorSpace::Lch),
    ("oklab", ColorSpace::Oklab),
    ("ok-lab", ColorSpace::Oklab),
    ("oklch", ColorSpace::Oklch),
    ("ok-lch", ColorSpace::Oklch),
    ("hsl", ColorSpace::Hsl),
    ("hwb", ColorSpace::Hwb),
];

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorSpace {
    /// Get the CSS identifier for this color space.
    pub const fn name(&self) -> &'static str {
        use ColorSpace::*;

        match *self {
            Srgb => "srgb",
            SrgbLinear => "srgb-linear",
            DisplayP3 => "display-p3",
            A98Rgb => "a98-rgb",
            ProphotoRgb => "prophoto-rgb",
            Rec2020 => "rec2020",
            XyzD50 => "xyz-d50",
            XyzD65 => "xyz-d65",
            Lab => "lab",
            Lch => "lch",
            Oklab => "oklab",
            Oklch => "oklch",
            Hsl => "hsl",
            Hwb => "hwb",
        }
    }

    /// Get the kind of this color space.
    pub const fn kind(&self) -> SpaceKind {
        use ColorSpace::*;

        match *self {
            Srgb | SrgbLinear | DisplayP3 | A98Rgb | ProphotoRgb | Rec2020 => SpaceKind::Rgb,
            XyzD50 | XyzD65 => SpaceKind::Xyz,
            Lab | Oklab => SpaceKind::Lab,
            Lch | Oklch => SpaceKind::Lch,
            Hsl => SpaceKind::Hsl,
            Hwb => SpaceKind::Hwb,
        }
    }

    /// Get this color space's reference white point.
    pub const fn white_point(&self) -> WhitePoint {
        use ColorSpace::*;

        match *self {
            ProphotoRgb | XyzD50 | Lab | Lch => WhitePoint::D50,
            _ => WhitePoint::D65,
        }
    }

    /// Determine whether this color space is RGB.
    ///
    /// RGB color spaces are additive and have red, green, and blue coordinates.
    /// In-gamut colors have coordinates in unit range `0..=1`.
    pub const fn is_rgb(&self) -> bool {
        matches!(self.kind(), SpaceKind::Rgb)
    }

    /// Determine whether this color space is polar, i.e., has a hue.
    pub const fn is_polar(&self) -> bool {
        matches!(
            self.kind(),
            SpaceKind::Lch | SpaceKind::Hsl | SpaceKind::Hwb
        )
    }

    /// Determine whether this color space is one of the Oklab variations.
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Self::Oklab | Self::Oklch)
    }

    /// Determine whether this color space is bounded.
    ///
    /// XYZ and the Lab/LCh variations are *unbounded* and hence can model any
    /// color. By contrast, RGB color spaces as well as HSL and HWB are
    /// *bounded*.
    pub const fn is_bounded(&self) -> bool {
        self.gamut().is_some()
    }

    /// Get the RGB color space whose gamut bounds this color space.
    ///
    /// That is the color space itself for RGB color spaces and sRGB for HSL
    /// and HWB. Unbounded color spaces have no such gamut.
    pub const fn gamut(&self) -> Option<ColorSpace> {
        match self.kind() {
            SpaceKind::Rgb => Some(*self),
            SpaceKind::Hsl | SpaceKind::Hwb => Some(ColorSpace::Srgb),
            _ => None,
        }
    }

    /// Get the model used for colors in this color space by default.
    ///
    /// Conversion tags its results with this model.
    pub const fn default_model(&self) -> ColorModel {
        use ColorSpace::*;

        match *self {
            Srgb => ColorModel::Rgb,
            SrgbLinear | DisplayP3 | A98Rgb | ProphotoRgb | Rec2020 => ColorModel::ColorFunction,
            XyzD50 | XyzD65 => ColorModel::Xyz,
            Lab | Oklab => ColorModel::Lab,
            Lch | Oklch => ColorModel::Lch,
            Hsl => ColorModel::Hsl,
            Hwb => ColorModel::Hwb,
        }
    }

    /// Determine whether colors in this color space may use the given model.
    pub const fn supports(&self, model: ColorModel) -> bool {
        match (self.kind(), model) {
            (SpaceKind::Rgb, ColorModel::ColorFunction) => true,
            (SpaceKind::Rgb, ColorModel::Rgb) => matches!(*self, Self::Srgb),
            (SpaceKind::Xyz, ColorModel::Xyz | ColorModel::ColorFunction) => true,
            (SpaceKind::Lab, ColorModel::Lab) => true,
            (SpaceKind::Lch, ColorModel::Lch) => true,
            (SpaceKind::Hsl, ColorModel::Hsl) => true,
            (SpaceKind::Hwb, ColorModel::Hwb) => true,
            _ => false,
        }
    }

    /// Create a human-readable representation for this color space. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorSpace {
    /// Look up the color space with the given identifier.
    ///
    /// Matching is ASCII case-insensitive and also recognizes the `xyz` alias
    /// for `xyz-d65` as well as `ok-lab` and `ok-lch`.
    ///
    /// ```
    /// # use csscolor::ColorSpace;
    /// assert_eq!(ColorSpace::lookup("Display-P3"), Ok(ColorSpace::DisplayP3));
    /// assert_eq!(ColorSpace::lookup("xyz"), Ok(ColorSpace::XyzD65));
    /// assert!(ColorSpace::lookup("cmyk").is_err());
    /// ```
    pub fn lookup(name: &str) -> Result<Self, ColorError> {
        let name = name.trim();
        COLOR_SPACES
            .iter()
            .find(|(id, _)| id.eq_ignore_ascii_case(name))
            .map(|(_, space)| *space)
            .ok_or_else(|| ColorError::UnknownColorSpace(name.to_string()))
    }

    /// Get an iterator over all predefined color spaces.
    pub fn all() -> impl Iterator<Item = ColorSpace> {
        use ColorSpace::*;

        [
            Srgb,
            SrgbLinear,
            DisplayP3,
            A98Rgb,
            ProphotoRgb,
            Rec2020,
            XyzD50,
            XyzD65,
            Lab,
            Lch,
            Oklab,
            Oklch,
            Hsl,
            Hwb,
        ]
        .into_iter()
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================
