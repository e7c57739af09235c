/// An extension trait for floating point numbers.
///
/// For now, this trait exists solely to pre-compute the rounding factor for
/// equality comparisons, which depends on the floating point representation
/// used for storing components.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal.
    const ROUNDING_FACTOR: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e10;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e4;
}

/// A 3 by 3 matrix.
pub(crate) type Matrix = [[f64; 3]; 3];

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub(crate) fn multiply(matrix: &Matrix, vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

/// Normalize the hue to `0..360`.
#[inline]
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

#[cfg(test)]
mod test {
    use super::{multiply, normalize_hue};

    #[test]
    fn test_multiply() {
        let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        assert_eq!(multiply(&identity, &[0.25, 0.5, 0.75]), [0.25, 0.5, 0.75]);

        let swap = [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]];
        assert_eq!(multiply(&swap, &[1.0, 2.0, 3.0]), [2.0, 1.0, 6.0]);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-1e-20), 0.0);
    }
}
