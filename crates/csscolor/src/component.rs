//! Numeric components of color values.
//!
//! A [`Component`] is a number that has already been resolved by the host,
//! i.e., is no longer an expression, and carries a [`Unit`]. It also records
//! whether the number was computed from a dynamic expression such as `calc()`,
//! since percentages that were computed are clamped into range instead of being
//! rejected.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::format_number;
use crate::Float;

/// The unit of a numeric component.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "csscolor.color")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A plain number.
    Number,
    /// A percentage, with 100 meaning the full channel range.
    Percent,
    /// An angle in degrees.
    Degree,
    /// An angle in radians.
    Radian,
    /// An angle in gradians, with 400 per full turn.
    Gradian,
    /// An angle in turns.
    Turn,
}

impl Unit {
    /// Determine whether this unit is an angle.
    pub const fn is_angle(&self) -> bool {
        matches!(
            *self,
            Self::Degree | Self::Radian | Self::Gradian | Self::Turn
        )
    }

    /// Get the CSS suffix for this unit.
    pub const fn suffix(&self) -> &'static str {
        match *self {
            Self::Number => "",
            Self::Percent => "%",
            Self::Degree => "deg",
            Self::Radian => "rad",
            Self::Gradian => "grad",
            Self::Turn => "turn",
        }
    }
}

/// A resolved numeric component with its unit.
///
/// # Examples
///
/// ```
/// # use csscolor::{Component, Unit};
/// let angle = Component::new(0.25, Unit::Turn);
/// assert_eq!(angle.to_degrees(), 90.0);
/// assert_eq!(angle.to_string(), "0.25turn");
///
/// let percent = Component::percent(120.0).as_computed();
/// assert!(percent.is_computed());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "csscolor.color"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Component {
    value: Float,
    unit: Unit,
    computed: bool,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Component {
    /// Create a new literal component with the given value and unit.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(value: Float, unit: Unit) -> Self {
        Self {
            value,
            unit,
            computed: false,
        }
    }

    /// Create a new literal component with the given value and unit.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(value: Float, unit: Unit) -> Self {
        Self {
            value,
            unit,
            computed: false,
        }
    }

    /// Create a copy of this component that is marked as computed.
    pub const fn as_computed(&self) -> Self {
        Self {
            value: self.value,
            unit: self.unit,
            computed: true,
        }
    }

    /// Get this component's value.
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Get this component's unit.
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Determine whether this component was computed from an expression.
    pub const fn is_computed(&self) -> bool {
        self.computed
    }

    /// Convert this component to degrees.
    ///
    /// Plain numbers are treated as degrees already. Percentages have no
    /// meaning as angles and are returned unchanged.
    pub fn to_degrees(&self) -> f64 {
        let value = self.value as f64;
        match self.unit {
            Unit::Number | Unit::Percent | Unit::Degree => value,
            Unit::Radian => value.to_degrees(),
            Unit::Gradian => value * 0.9,
            Unit::Turn => value * 360.0,
        }
    }

    /// Get a debug representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }

    /// Get the CSS representation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl Component {
    /// Create a new plain number.
    pub const fn number(value: Float) -> Self {
        Self::new(value, Unit::Number)
    }

    /// Create a new percentage.
    pub const fn percent(value: Float) -> Self {
        Self::new(value, Unit::Percent)
    }

    /// Create a new angle in degrees.
    pub const fn degrees(value: Float) -> Self {
        Self::new(value, Unit::Degree)
    }

    /// Create a copy of this component with the given value but the same unit
    /// and computed flag.
    pub(crate) const fn with_value(&self, value: Float) -> Self {
        Self {
            value,
            unit: self.unit,
            computed: self.computed,
        }
    }
}

impl std::fmt::Display for Component {
    /// Format this component as a CSS number, percentage, or angle.
    ///
    /// This method respects the formatter's precision, defaulting to 5 digits
    /// past the decimal.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let number = format_number(self.value as f64, f.precision().unwrap_or(5));
        f.write_str(&number)?;
        f.write_str(self.unit.suffix())
    }
}
