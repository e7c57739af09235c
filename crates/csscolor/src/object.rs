#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::component::Component;
use crate::core::{
    channels, clip, convert, delta_e_2000, delta_e_ok, format, format_hex, format_minified,
    from_24bit, in_gamut, to_24bit, to_8bit, to_eq_bits, to_eq_hue_bits, to_gamut, Channel,
    ColorModel, ColorSpace, SpaceKind, ALPHA,
};
use crate::error::ColorError;
use crate::opt::MappingOptions;
use crate::{Bits, Float};

/// The color space of a color value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Space {
    Predefined(ColorSpace),
    Custom(String),
}

/// Determine whether the name is a dashed identifier such as `--swop5c`.
fn is_custom_ident(name: &str) -> bool {
    match name.strip_prefix("--") {
        None | Some("") => false,
        Some(rest) => rest
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()),
    }
}

impl Space {
    /// Resolve the identifier for the color model.
    fn lookup(model: ColorModel, name: &str) -> Result<Self, ColorError> {
        let name = name.trim();
        let mismatch = || ColorError::SpaceMismatch {
            model,
            space: name.to_string(),
        };

        match ColorSpace::lookup(name) {
            Ok(space) if space.supports(model) => Ok(Space::Predefined(space)),
            Ok(_) => Err(mismatch()),
            Err(_) if is_custom_ident(name) && model.accepts_custom() => {
                Ok(Space::Custom(name.to_string()))
            }
            Err(_) if is_custom_ident(name) => Err(mismatch()),
            Err(err) => Err(err),
        }
    }

    fn predefined(&self) -> Option<ColorSpace> {
        match self {
            Space::Predefined(space) => Some(*space),
            Space::Custom(_) => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            Space::Predefined(space) => space.name(),
            Space::Custom(name) => name,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CSS color value.
///
/// A color value combines a [`ColorModel`], i.e., the CSS notation, with a
/// color space and four [`Component`]s. Logically, alpha comes first, at index
/// 0, and the three chromatic components follow at indexes 1 through 3. When
/// not specified, alpha is the number 1.
///
/// Model and color space are fixed at construction. Components can be
/// updated with [`ColorValue::set_component`], which validates the new
/// component against the channel. All other operations produce new color
/// values.
///
/// # Coordinates
///
/// Components keep the unit they were specified with. Conversion consumes
/// their resolved *coordinates*: Percentages are scaled by the channel's
/// reference range, `rgb()` numbers are divided by 255, and angles become
/// degrees. Results of conversion use plain numbers, except for the channels
/// of `rgb()`, HSL saturation and lightness, and HWB whiteness and blackness,
/// which use percentages.
///
/// # Examples
///
/// ```
/// # use csscolor::{ColorModel, ColorSpace, ColorValue, Component};
/// let salmon = ColorValue::new(
///     ColorModel::Lab,
///     "lab",
///     [
///         Component::percent(67.0),
///         Component::number(19.2),
///         Component::number(14.8),
///     ],
///     None,
/// )?;
///
/// let srgb = salmon.to(ColorSpace::Srgb)?;
/// assert_eq!(format!("{:.2}", srgb), "rgb(79.52% 58.81% 53.9%)");
/// assert_eq!(format!("{:.2}", srgb.to(ColorSpace::Lch)?), "lch(67 24.24 37.63)");
/// # Ok::<(), csscolor::ColorError>(())
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, module = "csscolor.color"))]
#[derive(Clone, Debug)]
pub struct ColorValue {
    model: ColorModel,
    space: Space,
    components: [Component; 4],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ColorValue {
    /// Create a new color value.
    ///
    /// The color space is a predefined identifier or, for the `color()`
    /// function only, a dashed custom identifier. Each component is validated
    /// just as by [`ColorValue::set_component`]. A missing alpha defaults to
    /// the number 1.
    #[cfg(feature = "pyffi")]
    #[new]
    #[pyo3(signature = (model, space, components, alpha=None))]
    pub fn new(
        model: ColorModel,
        space: &str,
        components: [Component; 3],
        alpha: Option<Component>,
    ) -> Result<Self, ColorError> {
        Self::create(model, space, components, alpha)
    }

    /// Create a new color value.
    ///
    /// The color space is a predefined identifier or, for the `color()`
    /// function only, a dashed custom identifier. Each component is validated
    /// just as by [`ColorValue::set_component`]. A missing alpha defaults to
    /// the number 1.
    #[cfg(not(feature = "pyffi"))]
    pub fn new(
        model: ColorModel,
        space: &str,
        components: [Component; 3],
        alpha: Option<Component>,
    ) -> Result<Self, ColorError> {
        Self::create(model, space, components, alpha)
    }

    /// Get this color value's model.
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// Get this color value's predefined color space. Values in custom color
    /// spaces have none.
    pub fn space(&self) -> Option<ColorSpace> {
        self.space.predefined()
    }

    /// Get the identifier of this color value's color space.
    pub fn space_name(&self) -> &str {
        self.space.name()
    }

    /// Determine whether this color value has a custom color space.
    pub fn is_custom(&self) -> bool {
        matches!(self.space, Space::Custom(_))
    }

    /// Get all four components, starting with alpha.
    pub fn components(&self) -> [Component; 4] {
        self.components
    }

    /// Get the component with the given index, with 0 being alpha.
    pub fn component(&self, index: usize) -> Result<Component, ColorError> {
        self.components
            .get(index)
            .copied()
            .ok_or(ColorError::NoSuchComponent(index))
    }

    /// Get the alpha component.
    pub fn alpha(&self) -> Component {
        self.components[0]
    }

    /// Get the component for the CSS channel keyword, e.g., `h` for HSL
    /// colors or `alpha` for all colors.
    pub fn channel(&self, name: &str) -> Option<Component> {
        if name.eq_ignore_ascii_case(ALPHA.name) {
            return Some(self.components[0]);
        }

        self.channels()
            .iter()
            .position(|channel| channel.name.eq_ignore_ascii_case(name))
            .map(|index| self.components[index + 1])
    }

    /// Get the resolved coordinates of the chromatic components.
    pub fn coordinates(&self) -> [f64; 3] {
        let channels = self.channels();
        [
            channels[0].resolve(&self.components[1]),
            channels[1].resolve(&self.components[2]),
            channels[2].resolve(&self.components[3]),
        ]
    }

    /// Replace the component with the given index, with 0 being alpha.
    ///
    /// Hues accept angles and numbers, all other channels numbers and
    /// percentages. A literal percentage outside the channel's range is
    /// rejected, whereas a computed one is clamped. Alpha always is clamped.
    /// If this method fails, the color value is unchanged.
    ///
    /// ```
    /// # use csscolor::{ColorError, ColorValue, Component};
    /// let mut color = ColorValue::oklch(0.7, 0.1, 120.0);
    ///
    /// let result = color.set_component(1, Some(Component::percent(120.0)));
    /// assert!(matches!(result, Err(ColorError::InvalidRange { .. })));
    /// assert_eq!(color.component(1)?, Component::number(0.7));
    ///
    /// color.set_component(1, Some(Component::percent(120.0).as_computed()))?;
    /// assert_eq!(color.component(1)?.value(), 100.0);
    /// # Ok::<(), ColorError>(())
    /// ```
    pub fn set_component(
        &mut self,
        index: usize,
        component: Option<Component>,
    ) -> Result<(), ColorError> {
        if 3 < index {
            return Err(ColorError::NoSuchComponent(index));
        }

        let component = component.ok_or(ColorError::MissingValue)?;
        let channel = if index == 0 {
            &ALPHA
        } else {
            &self.channels()[index - 1]
        };

        self.components[index] = channel.check(component)?;
        Ok(())
    }

    /// Replace the alpha component.
    pub fn set_alpha(&mut self, alpha: Option<Component>) -> Result<(), ColorError> {
        self.set_component(0, alpha)
    }

    /// Convert this color value to the target color space.
    ///
    /// The result uses the target's default model and carries over alpha
    /// unchanged. Converting to the same color space returns a copy. Values in
    /// custom color spaces cannot be converted.
    pub fn to(&self, target: ColorSpace) -> Result<Self, ColorError> {
        let source = self.predefined_space()?;
        if source == target {
            return Ok(self.clone());
        }

        let coordinates = convert(source, target, &self.coordinates());
        Ok(Self::with_coordinates(target, &coordinates, self.components[0]))
    }

    /// Convert this color value to the color space with the given identifier.
    pub fn convert(&self, target: &str) -> Result<Self, ColorError> {
        self.to(ColorSpace::lookup(target)?)
    }

    /// Determine whether this color value is in gamut for the color space.
    ///
    /// Since unbounded color spaces can model any color, colors always are in
    /// gamut for them. HSL and HWB share sRGB's gamut. The check allows for
    /// the default tolerance.
    pub fn in_gamut(&self, space: ColorSpace) -> Result<bool, ColorError> {
        self.in_gamut_with(space, &MappingOptions::default())
    }

    /// Map this color value into the gamut of the color space.
    ///
    /// If the color value is in gamut already, this method returns the same
    /// value as [`ColorValue::to`]. Otherwise, it uses the CSS Color 4 gamut
    /// mapping algorithm, which reduces chroma in Oklch until the clipped
    /// color is within a just noticeable difference.
    pub fn to_gamut(&self, space: ColorSpace) -> Result<Self, ColorError> {
        self.to_gamut_with(space, &MappingOptions::default())
    }

    /// Convert this color value to the color space, failing if the result is
    /// out of gamut.
    pub fn to_gamut_strict(&self, space: ColorSpace) -> Result<Self, ColorError> {
        if !self.in_gamut(space)? {
            return Err(ColorError::OutOfGamut(space));
        }

        self.to(space)
    }

    /// Convert this color value to the color space and clip the result to its
    /// gamut.
    ///
    /// Unlike [`ColorValue::to_gamut`], this method clamps each RGB coordinate
    /// independently, which may noticeably shift hue.
    pub fn clip(&self, space: ColorSpace) -> Result<Self, ColorError> {
        let source = self.predefined_space()?;
        let Some(gamut) = space.gamut() else {
            return self.to(space);
        };

        let clipped = clip(gamut, &convert(source, gamut, &self.coordinates()));
        let coordinates = convert(gamut, space, &clipped);
        Ok(Self::with_coordinates(space, &coordinates, self.components[0]))
    }

    /// Compute the CIEDE2000 color difference between this and the other
    /// color value.
    ///
    /// The difference is symmetric and non-negative. It is undefined for color
    /// values in custom color spaces.
    pub fn delta_e_2000(&self, other: &Self) -> Result<f64, ColorError> {
        let lab1 = self.coordinates_in(ColorSpace::Lab)?;
        let lab2 = other.coordinates_in(ColorSpace::Lab)?;
        Ok(delta_e_2000(&lab1, &lab2))
    }

    /// Compute the Euclidean distance in Oklab between this and the other
    /// color value.
    pub fn delta_e_ok(&self, other: &Self) -> Result<f64, ColorError> {
        let oklab1 = self.coordinates_in(ColorSpace::Oklab)?;
        let oklab2 = other.coordinates_in(ColorSpace::Oklab)?;
        Ok(delta_e_ok(&oklab1, &oklab2))
    }

    /// Format this color value in hashed hexadecimal notation.
    ///
    /// The result includes an alpha byte only if alpha is not 1. This method
    /// fails if the color value is not in gamut for sRGB.
    ///
    /// ```
    /// # use csscolor::{ColorValue, Component};
    /// let mut red = ColorValue::rgb(255, 0, 0);
    /// assert_eq!(red.to_hex_string()?, "#f00");
    ///
    /// red.set_alpha(Some(Component::number(0.5)))?;
    /// assert_eq!(red.to_hex_string()?, "#ff000080");
    /// # Ok::<(), csscolor::ColorError>(())
    /// ```
    pub fn to_hex_string(&self) -> Result<String, ColorError> {
        let source = self.predefined_space()?;
        let options = MappingOptions::default();
        let srgb = convert(source, ColorSpace::Srgb, &self.coordinates());
        if !in_gamut(ColorSpace::Srgb, &srgb, options.tolerance()) {
            return Err(ColorError::OutOfGamut(ColorSpace::Srgb));
        }

        let alpha = self.resolved_alpha();
        let alpha = if alpha == 1.0 {
            None
        } else {
            Some(to_8bit(alpha))
        };

        Ok(format_hex(to_24bit(&srgb), alpha))
    }

    /// Format this color value in its shortest equivalent form.
    ///
    /// This method produces the same result as the alternate format `{:#}`.
    pub fn to_minified_string(&self) -> String {
        format!("{:#}", self)
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Get the canonical CSS representation. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl ColorValue {
    /// Create a new color value in the predefined color space with the given
    /// coordinates and the default model.
    ///
    /// ```
    /// # use csscolor::{ColorModel, ColorSpace, ColorValue};
    /// let green = ColorValue::from_coordinates(ColorSpace::DisplayP3, [0.0, 1.0, 0.0]);
    /// assert_eq!(green.model(), ColorModel::ColorFunction);
    /// assert_eq!(green.to_string(), "color(display-p3 0 1 0)");
    /// ```
    pub fn from_coordinates(space: ColorSpace, coordinates: [f64; 3]) -> Self {
        Self::with_coordinates(space, &coordinates, Component::number(1.0))
    }

    /// Create a new `rgb()` color value from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_numbers(
            ColorModel::Rgb,
            ColorSpace::Srgb,
            [r as Float, g as Float, b as Float],
        )
    }

    /// Create a new CIE `lab()` color value.
    pub fn lab(l: Float, a: Float, b: Float) -> Self {
        Self::from_numbers(ColorModel::Lab, ColorSpace::Lab, [l, a, b])
    }

    /// Create a new CIE `lch()` color value.
    pub fn lch(l: Float, c: Float, h: Float) -> Self {
        Self::from_numbers(ColorModel::Lch, ColorSpace::Lch, [l, c, h])
    }

    /// Create a new `oklab()` color value.
    pub fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::from_numbers(ColorModel::Lab, ColorSpace::Oklab, [l, a, b])
    }

    /// Create a new `oklch()` color value.
    pub fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::from_numbers(ColorModel::Lch, ColorSpace::Oklch, [l, c, h])
    }

    /// Determine whether this color value is in gamut for the color space,
    /// using the tolerance of the given options.
    pub fn in_gamut_with(
        &self,
        space: ColorSpace,
        options: &MappingOptions,
    ) -> Result<bool, ColorError> {
        let source = self.predefined_space()?;
        let Some(gamut) = space.gamut() else {
            return Ok(true);
        };

        let coordinates = convert(source, gamut, &self.coordinates());
        Ok(in_gamut(gamut, &coordinates, options.tolerance()))
    }

    /// Map this color value into the gamut of the color space, using the
    /// given options.
    pub fn to_gamut_with(
        &self,
        space: ColorSpace,
        options: &MappingOptions,
    ) -> Result<Self, ColorError> {
        let source = self.predefined_space()?;
        let Some(gamut) = space.gamut() else {
            return self.to(space);
        };

        let coordinates = convert(source, gamut, &self.coordinates());
        if in_gamut(gamut, &coordinates, options.tolerance()) {
            return self.to(space);
        }

        let mapped = to_gamut(gamut, &coordinates, options);
        let coordinates = convert(gamut, space, &mapped);
        Ok(Self::with_coordinates(space, &coordinates, self.components[0]))
    }

    // ----------------------------------------------------------------------------------------------------------------

    fn create(
        model: ColorModel,
        space: &str,
        components: [Component; 3],
        alpha: Option<Component>,
    ) -> Result<Self, ColorError> {
        let space = Space::lookup(model, space)?;
        // color(xyz-d50 ...) and color(xyz-d65 ...) always use the XYZ model
        let model = match space.predefined() {
            Some(predefined) if predefined.kind() == SpaceKind::Xyz => ColorModel::Xyz,
            _ => model,
        };
        let channels = channels(model, space.predefined());
        let [c1, c2, c3] = components;

        Ok(Self {
            model,
            space,
            components: [
                ALPHA.check(alpha.unwrap_or(Component::number(1.0)))?,
                channels[0].check(c1)?,
                channels[1].check(c2)?,
                channels[2].check(c3)?,
            ],
        })
    }

    fn from_numbers(model: ColorModel, space: ColorSpace, numbers: [Float; 3]) -> Self {
        let [n1, n2, n3] = numbers;
        Self {
            model,
            space: Space::Predefined(space),
            components: [
                Component::number(1.0),
                Component::number(n1),
                Component::number(n2),
                Component::number(n3),
            ],
        }
    }

    fn with_coordinates(space: ColorSpace, coordinates: &[f64; 3], alpha: Component) -> Self {
        let model = space.default_model();
        let channels = channels(model, Some(space));

        Self {
            model,
            space: Space::Predefined(space),
            components: [
                alpha,
                channels[0].unresolve(coordinates[0]),
                channels[1].unresolve(coordinates[1]),
                channels[2].unresolve(coordinates[2]),
            ],
        }
    }

    fn channels(&self) -> &'static [Channel; 3] {
        channels(self.model, self.space.predefined())
    }

    fn predefined_space(&self) -> Result<ColorSpace, ColorError> {
        self.space.predefined().ok_or_else(|| {
            log::debug!(
                "color value in custom color space `{}` cannot be converted",
                self.space.name()
            );
            ColorError::UnknownColorSpace(self.space.name().to_string())
        })
    }

    fn coordinates_in(&self, target: ColorSpace) -> Result<[f64; 3], ColorError> {
        let source = self
            .space
            .predefined()
            .ok_or(ColorError::UndefinedDifference)?;
        Ok(convert(source, target, &self.coordinates()))
    }

    fn resolved_alpha(&self) -> f64 {
        ALPHA.resolve(&self.components[0])
    }

    /// Get the 24-bit representation if this is an `rgb()` color value whose
    /// channels, including alpha, all are exact 8-bit values.
    fn to_exact_hex(&self) -> Option<String> {
        if self.model != ColorModel::Rgb {
            return None;
        }

        let coordinates = self.coordinates();
        let [r, g, b] = to_24bit(&coordinates);
        let bytes = from_24bit(r, g, b);
        if (0..3).any(|index| 1e-9 <= (coordinates[index] - bytes[index]).abs()) {
            return None;
        }

        let alpha = self.resolved_alpha();
        let alpha = if alpha == 1.0 {
            None
        } else {
            let byte = to_8bit(alpha);
            if 1e-9 <= (alpha - byte as f64 / 255.0).abs() {
                return None;
            }
            Some(byte)
        };

        Some(format_hex([r, g, b], alpha))
    }

    /// Normalize the resolved components for equality testing and hashing.
    fn to_eq_components(&self) -> [Bits; 4] {
        let channels = self.channels();
        let mut bits = [to_eq_bits(self.resolved_alpha() as Float), 0, 0, 0];
        for (index, channel) in channels.iter().enumerate() {
            let value = channel.resolve(&self.components[index + 1]);
            bits[index + 1] = if channel.is_hue() {
                to_eq_hue_bits(value)
            } else {
                to_eq_bits(value as Float)
            };
        }
        bits
    }

    fn prefix(&self) -> String {
        let is_ok = self.space().is_some_and(|space| space.is_ok());
        match self.model {
            ColorModel::Lab if is_ok => "oklab(".to_string(),
            ColorModel::Lch if is_ok => "oklch(".to_string(),
            ColorModel::Xyz | ColorModel::ColorFunction => {
                format!("color({} ", self.space.name())
            }
            _ => format!("{}(", self.model.function_name()),
        }
    }
}

impl std::hash::Hash for ColorValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.model.hash(state);
        self.space.hash(state);
        self.to_eq_components().hash(state);
    }
}

impl PartialEq for ColorValue {
    /// Determine whether this color value equals the other color value.
    ///
    /// Two color values are equal if they have the same model and color space
    /// as well as equal resolved components. Hence an omitted alpha equals
    /// both `1` and `100%`, and `rgb(255 0 0)` equals `rgb(100% 0% 0%)`. But
    /// `rgb(255 0 0)` does not equal `color(srgb 1 0 0)`, since the two differ
    /// in notation. Values in XYZ always have the XYZ model, no matter whether
    /// they were created with [`ColorModel::Xyz`] or
    /// [`ColorModel::ColorFunction`]. Hues are compared modulo 360 degrees.
    /// As for [`to_eq_bits`], comparison tolerates the least significant
    /// digits of floating point error.
    ///
    /// ```
    /// # use csscolor::{ColorValue, Component, Unit};
    /// let mut color = ColorValue::oklch(0.5, 0.1, 305.0);
    /// assert_eq!(color, ColorValue::oklch(0.5, 0.1, 665.0));
    ///
    /// color.set_component(3, Some(Component::new(-0.15, Unit::Turn)))?;
    /// assert_eq!(color, ColorValue::oklch(0.5, 0.1, 306.0));
    /// # Ok::<(), csscolor::ColorError>(())
    /// ```
    fn eq(&self, other: &Self) -> bool {
        if self.model != other.model || self.space != other.space {
            return false;
        } else if self.components == other.components {
            return true;
        }

        self.to_eq_components() == other.to_eq_components()
    }
}

impl Eq for ColorValue {}

impl std::fmt::Display for ColorValue {
    /// Format this color value in CSS notation.
    ///
    /// By default, this method produces the canonical serialization, with
    /// components in their specified units and ` / alpha` only if alpha is not
    /// 1. The alternate form `{:#}` produces the minified serialization
    /// instead, which strips leading zeros, picks the shortest equivalent
    /// literal for each component, and uses hexadecimal notation for `rgb()`
    /// colors with exact 8-bit channels. Both forms respect the formatter's
    /// precision, defaulting to 5 digits past the decimal.
    ///
    /// ```
    /// # use csscolor::{ColorModel, ColorValue, Component, Unit};
    /// let color = ColorValue::new(
    ///     ColorModel::Hsl,
    ///     "hsl",
    ///     [
    ///         Component::new(0.25, Unit::Turn),
    ///         Component::percent(50.0),
    ///         Component::percent(40.0),
    ///     ],
    ///     Some(Component::percent(75.0)),
    /// )?;
    ///
    /// assert_eq!(color.to_string(), "hsl(0.25turn 50% 40% / 75%)");
    /// assert_eq!(format!("{:#}", color), "hsl(90 50 40/.75)");
    /// # Ok::<(), csscolor::ColorError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let show_alpha = self.resolved_alpha() != 1.0;

        if f.alternate() {
            if let Some(hex) = self.to_exact_hex() {
                return f.write_str(&hex);
            }
            format_minified(
                &self.prefix(),
                &self.components,
                self.channels(),
                show_alpha,
                f,
            )
        } else {
            format(&self.prefix(), &self.components, show_alpha, f)
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CSS value that is either numeric or a color.
///
/// Packing a color value into a `CssValue` and unpacking it again changes the
/// representation only.
///
/// ```
/// # use csscolor::{ColorValue, CssValue};
/// let value = CssValue::from(ColorValue::rgb(255, 0, 0));
/// assert!(value.is_color());
///
/// let color = ColorValue::try_from(value).map_err(|_| "not a color")?;
/// assert_eq!(color, ColorValue::rgb(255, 0, 0));
/// # Ok::<(), &str>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum CssValue {
    Numeric(Component),
    Color(Box<ColorValue>),
}

impl CssValue {
    /// Determine whether this value is a color.
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// Get this value as a color, if it is one.
    pub fn as_color(&self) -> Option<&ColorValue> {
        match self {
            Self::Color(color) => Some(color),
            Self::Numeric(_) => None,
        }
    }
}

impl From<Component> for CssValue {
    fn from(value: Component) -> Self {
        Self::Numeric(value)
    }
}

impl From<ColorValue> for CssValue {
    fn from(value: ColorValue) -> Self {
        Self::Color(Box::new(value))
    }
}

impl TryFrom<CssValue> for ColorValue {
    type Error = CssValue;

    fn try_from(value: CssValue) -> Result<Self, Self::Error> {
        match value {
            CssValue::Color(color) => Ok(*color),
            _ => Err(value),
        }
    }
}

impl TryFrom<CssValue> for Component {
    type Error = CssValue;

    fn try_from(value: CssValue) -> Result<Self, Self::Error> {
        match value {
            CssValue::Numeric(component) => Ok(component),
            _ => Err(value),
        }
    }
}

impl std::fmt::Display for CssValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(component) => component.fmt(f),
            Self::Color(color) => color.fmt(f),
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{ColorValue, CssValue};
    use crate::core::assert_close;
    use crate::opt::MappingOptions;
    use crate::{ColorError, ColorModel, ColorSpace, Component, Unit};

    fn lab(l: f64, a: f64, b: f64) -> ColorValue {
        ColorValue::new(
            ColorModel::Lab,
            "lab",
            [
                Component::percent(l as crate::Float),
                Component::number(a as crate::Float),
                Component::number(b as crate::Float),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_construction() {
        let p3 = ColorValue::new(
            ColorModel::ColorFunction,
            "Display-P3",
            [Component::number(0.5); 3],
            None,
        )
        .unwrap();
        assert_eq!(p3.space(), Some(ColorSpace::DisplayP3));
        assert_eq!(p3.space_name(), "display-p3");
        assert_eq!(p3.alpha(), Component::number(1.0));

        let custom = ColorValue::new(
            ColorModel::ColorFunction,
            "--swop5c",
            [Component::number(0.1), Component::number(0.2), Component::percent(30.0)],
            None,
        )
        .unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.space(), None);
        assert_eq!(custom.coordinates()[2], 0.3);
        assert_eq!(custom.to_string(), "color(--swop5c 0.1 0.2 30%)");

        assert_eq!(
            ColorValue::new(ColorModel::Lab, "lch", [Component::number(0.0); 3], None),
            Err(ColorError::SpaceMismatch {
                model: ColorModel::Lab,
                space: "lch".to_string()
            })
        );
        assert!(matches!(
            ColorValue::new(ColorModel::Rgb, "--swop5c", [Component::number(0.0); 3], None),
            Err(ColorError::SpaceMismatch { .. })
        ));
        assert_eq!(
            ColorValue::new(ColorModel::ColorFunction, "cmyk", [Component::number(0.0); 3], None),
            Err(ColorError::UnknownColorSpace("cmyk".to_string()))
        );
        assert_eq!(
            ColorValue::new(
                ColorModel::Hsl,
                "hsl",
                [Component::number(0.0), Component::degrees(3.0), Component::number(0.0)],
                None
            ),
            Err(ColorError::TypeMismatch { channel: "s" })
        );
    }

    #[test]
    fn test_accessors() {
        let color = ColorValue::new(
            ColorModel::Hwb,
            "hwb",
            [
                Component::new(0.5, Unit::Turn),
                Component::percent(20.0),
                Component::number(30.0),
            ],
            Some(Component::percent(50.0)),
        )
        .unwrap();

        assert_eq!(color.component(0), Ok(Component::percent(50.0)));
        assert_eq!(color.component(1), Ok(Component::new(0.5, Unit::Turn)));
        assert_eq!(color.component(4), Err(ColorError::NoSuchComponent(4)));
        assert_eq!(color.channel("W"), Some(Component::percent(20.0)));
        assert_eq!(color.channel("alpha"), Some(Component::percent(50.0)));
        assert_eq!(color.channel("l"), None);
        assert_close!(color.coordinates(), [180.0, 0.2, 0.3], 1e-12);
    }

    #[test]
    fn test_setters() {
        let mut color = ColorValue::new(
            ColorModel::Hsl,
            "hsl",
            [Component::degrees(120.0), Component::percent(50.0), Component::percent(50.0)],
            None,
        )
        .unwrap();
        let original = color.clone();

        assert_eq!(
            color.set_component(2, Some(Component::percent(120.0))),
            Err(ColorError::InvalidRange {
                channel: "s",
                value: 120.0
            })
        );
        assert_eq!(color.set_component(2, None), Err(ColorError::MissingValue));
        assert_eq!(
            color.set_component(4, Some(Component::number(0.0))),
            Err(ColorError::NoSuchComponent(4))
        );
        assert_eq!(
            color.set_component(1, Some(Component::percent(10.0))),
            Err(ColorError::TypeMismatch { channel: "h" })
        );
        assert_eq!(color.components(), original.components());

        color
            .set_component(2, Some(Component::percent(120.0).as_computed()))
            .unwrap();
        assert_eq!(color.component(2), Ok(Component::percent(100.0).as_computed()));

        color.set_alpha(Some(Component::number(1.7))).unwrap();
        assert_eq!(color.alpha(), Component::number(1.0));
        color.set_alpha(Some(Component::percent(-20.0))).unwrap();
        assert_eq!(color.alpha(), Component::percent(0.0));
    }

    #[test]
    fn test_convert_lab_to_srgb() {
        let color = lab(67.0, 19.2, 14.8);
        let srgb = color.to(ColorSpace::Srgb).unwrap();

        assert_eq!(srgb.model(), ColorModel::Rgb);
        assert_eq!(srgb.component(1).unwrap().unit(), Unit::Percent);
        assert_close!(
            srgb.coordinates(),
            [0.7952375260533641, 0.5880592346968682, 0.5390059264190445],
            1e-9
        );
        assert_eq!(format!("{:.2}", srgb), "rgb(79.52% 58.81% 53.9%)");

        let lch = srgb.to(ColorSpace::Lch).unwrap();
        assert_eq!(lch.model(), ColorModel::Lch);
        assert_close!(lch.coordinates(), [67.0, 24.242112119202815, 37.62623363866979], 1e-6);
        assert_close!(
            lch.to(ColorSpace::Lab).unwrap().coordinates(),
            color.coordinates(),
            1e-6
        );
    }

    #[test]
    fn test_gamut_of_lab_red() {
        let red = lab(54.2917, 80.8125, 69.8851);

        assert_eq!(red.in_gamut(ColorSpace::Srgb), Ok(false));
        assert_eq!(red.in_gamut(ColorSpace::Hsl), Ok(false));
        assert_eq!(red.in_gamut(ColorSpace::DisplayP3), Ok(true));
        assert_eq!(red.in_gamut(ColorSpace::Oklch), Ok(true));

        assert_eq!(
            red.to_gamut_strict(ColorSpace::Srgb),
            Err(ColorError::OutOfGamut(ColorSpace::Srgb))
        );
        assert_eq!(
            red.to_hex_string(),
            Err(ColorError::OutOfGamut(ColorSpace::Srgb))
        );
        assert!(red.to_gamut_strict(ColorSpace::DisplayP3).is_ok());

        let mapped = red.to_gamut(ColorSpace::Srgb).unwrap();
        assert_eq!(mapped.in_gamut(ColorSpace::Srgb), Ok(true));
        assert_eq!(mapped.to_hex_string().unwrap(), "#f00");
        assert_eq!(mapped.alpha(), Component::number(1.0));

        assert_eq!(mapped.coordinates(), [1.0, 0.0, 0.0]);

        let difference = red.delta_e_2000(&ColorValue::rgb(255, 0, 0)).unwrap();
        assert!((difference - 0.00367).abs() < 1e-4, "{}", difference);
        assert_eq!(red.delta_e_2000(&mapped), Ok(difference));

        let lenient = MappingOptions::builder().tolerance(0.0001).build();
        assert_eq!(red.in_gamut_with(ColorSpace::Srgb, &lenient), Ok(true));
    }

    #[test]
    fn test_gamut_mapping() {
        let green = ColorValue::from_coordinates(ColorSpace::DisplayP3, [0.0, 1.0, 0.0]);
        let srgb = green.to_gamut(ColorSpace::Srgb).unwrap();
        assert_close!(
            srgb.coordinates(),
            [0.0, 0.9857586592177795, 0.15951747306055666],
            1e-9
        );
        assert_eq!(srgb.in_gamut(ColorSpace::Srgb), Ok(true));
        assert_eq!(srgb.to_gamut(ColorSpace::Srgb), Ok(srgb.clone()));

        let hsl = green.to_gamut(ColorSpace::Hsl).unwrap();
        assert_eq!(hsl.model(), ColorModel::Hsl);
        assert_eq!(hsl.in_gamut(ColorSpace::Srgb), Ok(true));

        let clipped = green.clip(ColorSpace::Srgb).unwrap();
        assert_close!(clipped.coordinates(), [0.0, 1.0, 0.0], 1e-9);

        let salmon = lab(67.0, 19.2, 14.8);
        for space in [ColorSpace::Srgb, ColorSpace::DisplayP3, ColorSpace::Hwb, ColorSpace::Oklab] {
            assert_eq!(salmon.to_gamut(space), salmon.to(space), "{}", space);
        }
    }

    #[test]
    fn test_difference() {
        let c1 = lab(22.7233, 20.0904, -46.694);
        let c2 = lab(23.0331, 14.973, -42.5619);
        let d1 = c1.delta_e_2000(&c2).unwrap();
        let d2 = c2.delta_e_2000(&c1).unwrap();
        assert!((d1 - 2.0373).abs() < 0.0001, "{}", d1);
        assert_eq!(d1, d2);

        let oklab = ColorValue::oklab(0.52, -0.14, 0.11);
        let as_lab = oklab.to(ColorSpace::Lab).unwrap();
        assert_close!(
            as_lab.coordinates(),
            [46.301, -47.214, 50.177],
            0.01
        );
        assert!(oklab.delta_e_ok(&as_lab).unwrap() < 1e-9);

        for space in ColorSpace::all() {
            let other = c1.to(space).unwrap();
            let difference = c1.delta_e_2000(&other).unwrap();
            assert!(difference < 0.001, "{}: {}", space, difference);
        }

        let custom = ColorValue::new(
            ColorModel::ColorFunction,
            "--ink",
            [Component::number(0.0); 3],
            None,
        )
        .unwrap();
        assert_eq!(c1.delta_e_2000(&custom), Err(ColorError::UndefinedDifference));
        assert_eq!(custom.delta_e_ok(&c1), Err(ColorError::UndefinedDifference));
        assert_eq!(
            custom.to(ColorSpace::Srgb),
            Err(ColorError::UnknownColorSpace("--ink".to_string()))
        );
    }

    #[test]
    fn test_round_trips() {
        let origin = ColorValue::from_coordinates(ColorSpace::Srgb, [0.2, 0.6, 0.4]);

        for space1 in ColorSpace::all() {
            let color = origin.to(space1).unwrap();
            for space2 in ColorSpace::all() {
                let back = color.to(space2).unwrap().to(space1).unwrap();
                assert_close!(
                    back.coordinates(),
                    color.coordinates(),
                    1e-4,
                    "{} via {}",
                    space1,
                    space2
                );
            }
        }

        assert_eq!(
            origin.convert("ok-lch").unwrap().space(),
            Some(ColorSpace::Oklch)
        );
        assert!(origin.convert("cmyk").is_err());
    }

    #[test]
    fn test_equality() {
        let implicit = ColorValue::oklab(0.5, 0.1, -0.1);
        let mut explicit = implicit.clone();
        explicit.set_alpha(Some(Component::number(1.0))).unwrap();
        assert_eq!(implicit, explicit);
        explicit.set_alpha(Some(Component::percent(100.0))).unwrap();
        assert_eq!(implicit, explicit);

        let mut number = implicit.clone();
        number.set_alpha(Some(Component::number(0.68))).unwrap();
        let mut percent = implicit.clone();
        percent.set_alpha(Some(Component::percent(68.0))).unwrap();
        assert_eq!(number, percent);
        percent.set_alpha(Some(Component::percent(67.0))).unwrap();
        assert_ne!(number, percent);

        assert_eq!(
            ColorValue::rgb(255, 0, 0),
            ColorValue::new(
                ColorModel::Rgb,
                "srgb",
                [Component::percent(100.0), Component::percent(0.0), Component::number(0.0)],
                None
            )
            .unwrap()
        );
        assert_ne!(
            ColorValue::rgb(255, 0, 0),
            ColorValue::new(
                ColorModel::ColorFunction,
                "srgb",
                [Component::number(1.0), Component::number(0.0), Component::number(0.0)],
                None
            )
            .unwrap()
        );
        assert_eq!(ColorValue::lch(50.0, 30.0, -90.0), ColorValue::lch(50.0, 30.0, 270.0));

        let numbers = [Component::number(0.25), Component::number(0.5), Component::number(0.125)];
        let xyz = ColorValue::new(ColorModel::Xyz, "xyz-d50", numbers, None).unwrap();
        let function =
            ColorValue::new(ColorModel::ColorFunction, "xyz-d50", numbers, None).unwrap();
        assert_eq!(function.model(), ColorModel::Xyz);
        assert_eq!(xyz, function);
        assert_eq!(xyz, ColorValue::from_coordinates(ColorSpace::XyzD50, [0.25, 0.5, 0.125]));
        assert_eq!(function.to_string(), "color(xyz-d50 0.25 0.5 0.125)");
    }

    #[test]
    fn test_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ColorValue::oklch(0.5, 0.1, 305.0));
        set.insert(ColorValue::oklch(0.5, 0.1, 665.0));
        set.insert(ColorValue::rgb(255, 0, 0));
        assert_eq!(set.len(), 2);

        let numbers = [Component::number(0.3), Component::number(0.2), Component::number(0.1)];
        set.insert(ColorValue::new(ColorModel::Xyz, "xyz", numbers, None).unwrap());
        set.insert(ColorValue::new(ColorModel::ColorFunction, "xyz-d65", numbers, None).unwrap());
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(lab(67.0, 19.2, 14.8).to_string(), "lab(67% 19.2 14.8)");
        assert_eq!(
            lab(67.0, 19.2, 14.8).to_minified_string(),
            "lab(67 19.2 14.8)"
        );

        let oklab = ColorValue::oklab(0.52, -0.14, 0.11);
        assert_eq!(oklab.to_string(), "oklab(0.52 -0.14 0.11)");
        assert_eq!(format!("{:#}", oklab), "oklab(.52-.14 .11)");
        assert_eq!(
            ColorValue::lab(50.0, -20.5, -30.0).to_minified_string(),
            "lab(50-20.5-30)"
        );
        assert_eq!(
            ColorValue::oklch(0.5, 0.1, 30.0).to_minified_string(),
            "oklch(.5 .1 30)"
        );

        let mut red = ColorValue::rgb(255, 0, 0);
        assert_eq!(red.to_string(), "rgb(255 0 0)");
        assert_eq!(red.to_minified_string(), "#f00");
        red.set_alpha(Some(Component::number(0.5))).unwrap();
        assert_eq!(red.to_string(), "rgb(255 0 0 / 0.5)");
        assert_eq!(red.to_minified_string(), "rgb(255 0 0/.5)");
        assert_eq!(red.to_hex_string().unwrap(), "#ff000080");
        red.set_alpha(Some(Component::number(0.2))).unwrap();
        assert_eq!(red.to_minified_string(), "#f003");

        let xyz = ColorValue::from_coordinates(ColorSpace::XyzD50, [0.25, 0.5, 0.125]);
        assert_eq!(xyz.model(), ColorModel::Xyz);
        assert_eq!(xyz.to_string(), "color(xyz-d50 0.25 0.5 0.125)");

        let lch = ColorValue::new(
            ColorModel::Lch,
            "oklch",
            [Component::percent(70.0), Component::number(0.1), Component::degrees(120.0)],
            None,
        )
        .unwrap();
        assert_eq!(lch.to_string(), "oklch(70% 0.1 120deg)");
        assert_eq!(lch.to_minified_string(), "oklch(.7 .1 120)");
    }

    #[test]
    fn test_css_value() {
        let value = CssValue::from(Component::percent(10.0));
        assert!(!value.is_color());
        assert_eq!(value.to_string(), "10%");
        assert!(ColorValue::try_from(value.clone()).is_err());
        assert_eq!(Component::try_from(value), Ok(Component::percent(10.0)));

        let color = ColorValue::lab(50.0, 10.0, 10.0);
        let packed = CssValue::from(color.clone());
        assert_eq!(packed.as_color(), Some(&color));
        assert_eq!(packed.to_string(), "lab(50 10 10)");
        assert_eq!(ColorValue::try_from(packed), Ok(color));
    }
}
