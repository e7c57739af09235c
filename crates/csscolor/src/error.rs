//! Utility module with csscolor's errors.

#[cfg(feature = "pyffi")]
use pyo3::{
    exceptions::{PyIndexError, PyTypeError, PyValueError},
    prelude::*,
};

use crate::core::{ColorModel, ColorSpace};

/// An error while constructing, accessing, converting, or comparing color
/// values.
///
/// Operations never modify a color value when they fail. Nothing is retried
/// either; each failure is reported to the caller as is.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A color space identifier that is neither predefined nor a valid custom
    /// identifier, or a conversion that involves a custom color space.
    UnknownColorSpace(String),

    /// A color space that cannot be used with the color model. For example,
    /// the `lab()` function only accepts `lab` and `oklab`.
    SpaceMismatch { model: ColorModel, space: String },

    /// A component with a unit that does not fit the channel. For example, a
    /// saturation in degrees.
    TypeMismatch { channel: &'static str },

    /// A component that is required but missing.
    MissingValue,

    /// A literal percentage outside the channel's range or a non-finite
    /// component value.
    InvalidRange { channel: &'static str, value: f64 },

    /// A component index other than `0..=3`.
    NoSuchComponent(usize),

    /// A color that is not in gamut for the target color space.
    OutOfGamut(ColorSpace),

    /// A color difference involving a color in a custom color space.
    UndefinedDifference,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ColorError::*;

        match self {
            UnknownColorSpace(name) => {
                f.write_fmt(format_args!("color space `{}` should be predefined but is not", name))
            }
            SpaceMismatch { model, space } => f.write_fmt(format_args!(
                "{} color model does not support color space `{}`",
                model, space
            )),
            TypeMismatch { channel } => f.write_fmt(format_args!(
                "component for channel `{}` has unsuitable unit",
                channel
            )),
            MissingValue => f.write_str("color component should have a value but has none"),
            InvalidRange { channel, value } => f.write_fmt(format_args!(
                "component {} for channel `{}` is out of range",
                value, channel
            )),
            NoSuchComponent(index) => f.write_fmt(format_args!(
                "component index {} does not fit into range 0..=3",
                index
            )),
            OutOfGamut(space) => f.write_fmt(format_args!(
                "color should be in gamut for {} but is not",
                space
            )),
            UndefinedDifference => {
                f.write_str("color difference is undefined for custom color spaces")
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        match value {
            ColorError::NoSuchComponent(_) => PyIndexError::new_err(value.to_string()),
            ColorError::TypeMismatch { .. } | ColorError::MissingValue => {
                PyTypeError::new_err(value.to_string())
            }
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::ColorError;
    use crate::core::{ColorModel, ColorSpace};

    #[test]
    fn test_messages() {
        assert_eq!(
            ColorError::UnknownColorSpace("cmyk".to_string()).to_string(),
            "color space `cmyk` should be predefined but is not"
        );
        assert_eq!(
            ColorError::SpaceMismatch {
                model: ColorModel::Lab,
                space: "lch".to_string()
            }
            .to_string(),
            "Lab color model does not support color space `lch`"
        );
        assert_eq!(
            ColorError::OutOfGamut(ColorSpace::Srgb).to_string(),
            "color should be in gamut for srgb but is not"
        );
        assert_eq!(
            ColorError::NoSuchComponent(4).to_string(),
            "component index 4 does not fit into range 0..=3"
        );
    }
}
