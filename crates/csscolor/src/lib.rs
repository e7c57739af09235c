//! # csscolor: CSS Color Values in Rust
//!
//! csscolor is the color value engine behind a CSS implementation. It takes
//! color values whose components have already been parsed and resolved by the
//! host and supports the operations that CSS Color 4 defines on them:
//!
//!   * **Conversion** between the predefined color spaces, i.e., sRGB and its
//!     linear version, Display P3, Adobe RGB (1998), ProPhoto RGB, Rec. 2020,
//!     XYZ with D50 and D65 white points, CIELAB/CIELCh, Oklab/Oklch, as well
//!     as HSL and HWB. Conversions go through XYZ and apply Bradford chromatic
//!     adaptation when white points differ.
//!   * **Gamut mapping** with the CSS Color 4 algorithm, which reduces chroma
//!     in Oklch until the clipped color is within a just noticeable
//!     difference, plus plain clipping and strict conversion.
//!   * **Color difference** with CIEDE2000 and with the Euclidean distance in
//!     Oklab.
//!   * **Serialization** in canonical and minified CSS form as well as hashed
//!     hexadecimal notation.
//!
//! Color values are [`ColorValue`]s, which combine a [`ColorModel`], i.e., the
//! CSS notation, with a color space and four [`Component`]s, with alpha coming
//! first. Components carry a [`Unit`] and remember whether they were computed
//! from a dynamic expression, since computed percentages are clamped into
//! range instead of being rejected. The [`opt`] module configures gamut
//! mapping and the [`error`] module defines the crate's errors.
//!
//! ```
//! # use csscolor::{ColorModel, ColorSpace, ColorValue, Component};
//! let red = ColorValue::new(
//!     ColorModel::Lab,
//!     "lab",
//!     [
//!         Component::percent(54.2917),
//!         Component::number(80.8125),
//!         Component::number(69.8851),
//!     ],
//!     None,
//! )?;
//!
//! assert!(!red.in_gamut(ColorSpace::Srgb)?);
//! assert!(red.in_gamut(ColorSpace::DisplayP3)?);
//! assert_eq!(red.to_gamut(ColorSpace::Srgb)?.to_hex_string()?, "#f00");
//! # Ok::<(), csscolor::ColorError>(())
//! ```
//!
//! ## Feature Flags
//!
//! The `f64` feature, which is enabled by default, stores component values as
//! `f64`. Without it, they are `f32`. Either way, all color math uses `f64`.
//! The `pyffi` feature adds Python bindings through PyO3.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod component;
mod core;
pub mod error;
mod object;
pub mod opt;

#[cfg(feature = "pyffi")]
pub use core::close_enough;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use component::{Component, Unit};
pub use core::{ColorModel, ColorSpace, SpaceKind, WhitePoint};
pub use error::ColorError;
pub use object::{ColorValue, CssValue};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn color(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(close_enough, m)?)?;

    m.add_class::<ColorModel>()?;
    m.add_class::<ColorSpace>()?;
    m.add_class::<ColorValue>()?;
    m.add_class::<Component>()?;
    m.add_class::<SpaceKind>()?;
    m.add_class::<Unit>()?;
    m.add_class::<WhitePoint>()?;

    Ok(())
}
