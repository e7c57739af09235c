#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::math::{normalize_hue, FloatExt};
use crate::{Bits, Float};

/// Test macro for asserting the equality of floating point numbers.
///
/// This macro relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings.
///
/// # Panics
///
/// This macro panics if the normalized bit strings are not identical. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        let bits1 = $crate::to_eq_bits(f1);
        let bits2 = $crate::to_eq_bits(f2);
        assert_eq!(bits1, bits2, "quantities differ:\n{:?}\n{:?}", f1, f2);
    };
}

/// Test macro for asserting that two coordinate arrays are within the given
/// tolerance of each other.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by the tolerance or
/// more. Its message places the coordinates below each other for easy
/// comparability, followed by the optional formatted context.
#[cfg(test)]
macro_rules! assert_close {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        $crate::core::assert_close!($actual, $expected, $tolerance, "")
    };
    ($actual:expr, $expected:expr, $tolerance:expr, $($arg:tt)+) => {{
        let (actual, expected, tolerance): ([f64; 3], [f64; 3], f64) =
            ($actual, $expected, $tolerance);
        for index in 0..3 {
            assert!(
                (actual[index] - expected[index]).abs() < tolerance,
                "coordinates differ in {}:\n{:?}\n{:?}\n{}",
                index,
                actual,
                expected,
                format!($($arg)+)
            );
        }
    }};
}

#[cfg(test)]
pub(crate) use assert_close;

// --------------------------------------------------------------------------------------------------------------------

/// Determine whether the two floats are close enough to be considered equal.
/// <i class=python-only>Python only!</i>
///
/// This function relies on [`to_eq_bits`] to normalize the two floating point
/// numbers by zeroing out not-a-numbers, reducing resolution, and dropping the
/// sign of negative zeros and then compares the resulting bit strings. Color
/// values require additional normalization steps, as implemented by
/// [`ColorValue::eq`](crate::ColorValue::eq).
#[cfg(feature = "pyffi")]
#[pyfunction]
pub fn close_enough(f1: Float, f2: Float) -> bool {
    to_eq_bits(f1) == to_eq_bits(f2)
}

/// Helper function to normalize a floating point number before hashing or
/// equality testing.
///
/// This function zeros out not-a-number, reduces significant digits after the
/// decimal, and drops the sign of negative zero and returns the result as a bit
/// string. It is only public because the [`assert_close_enough`] test macro
/// uses it.
#[doc(hidden)]
#[inline]
pub fn to_eq_bits(f: Float) -> Bits {
    // Eliminate not-a-number.
    let mut f = if f.is_nan() { 0.0 } else { f };

    // Reduce precision.
    f = (<Float as FloatExt>::ROUNDING_FACTOR * f).round();

    // Too much negativity!
    if f == -0.0 {
        f = 0.0
    }

    f.to_bits()
}

/// Normalize a resolved hue for equality testing and hashing.
///
/// Hues that differ by full turns, such as 0 and 360 degrees, describe the
/// same color and hence normalize to the same bit string.
#[inline]
pub(crate) fn to_eq_hue_bits(degrees: f64) -> Bits {
    to_eq_bits((normalize_hue(degrees) / 360.0) as Float)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{to_eq_bits, to_eq_hue_bits};

    #[test]
    fn test_eq_bits() {
        assert_eq!(to_eq_bits(-0.0), to_eq_bits(0.0));
        assert_eq!(to_eq_bits(f64::NAN as crate::Float), to_eq_bits(0.0));
        assert_ne!(to_eq_bits(0.5), to_eq_bits(0.25));
        assert_close_enough!(0.1 + 0.2, 0.3);
    }

    #[test]
    fn test_eq_hue_bits() {
        assert_eq!(to_eq_hue_bits(360.0), to_eq_hue_bits(0.0));
        assert_eq!(to_eq_hue_bits(-30.0), to_eq_hue_bits(330.0));
        assert_ne!(to_eq_hue_bits(30.0), to_eq_hue_bits(330.0));
    }
}
