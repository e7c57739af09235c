/// Compute the Euclidian distance between the two Oklab coordinates.
///
/// This function computes the [Delta E
/// OK](https://www.w3.org/TR/css-color-4/#color-difference-OK) color
/// difference, which is the plain distance in Oklab. Both arguments must be
/// Oklab coordinates.
#[inline]
pub(crate) fn delta_e_ok(coordinates1: &[f64; 3], coordinates2: &[f64; 3]) -> f64 {
    let [l1, a1, b1] = coordinates1;
    let [l2, a2, b2] = coordinates2;

    let dl = l1 - l2;
    let da = a1 - a2;
    let db = b1 - b2;

    dl.mul_add(dl, da.mul_add(da, db * db)).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// 25 to the seventh power.
const POW25_7: f64 = 6_103_515_625.0;

/// Determine the hue angle in degrees `0..360`, with the origin having hue 0.
#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

/// Compute the CIEDE2000 color difference between two CIE Lab coordinates.
///
/// This function implements the formula as presented by Sharma, Wu, and Dalal
/// in [The CIEDE2000 Color-Difference
/// Formula](https://hajim.rochester.edu/ece/sites/gsharma/ciede2000/ciede2000noteCRNA.pdf),
/// with all parametric weighting factors equal to one. Both arguments must be
/// CIE Lab coordinates, i.e., with a D50 white point.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[f64; 3], coordinates2: &[f64; 3]) -> f64 {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    // Adjust a* for the G factor, which depends on mean chroma.
    let C_mean = (a1.hypot(b1) + a2.hypot(b2)) / 2.0;
    let C_mean7 = C_mean.powi(7);
    let G = 0.5 * (1.0 - (C_mean7 / (C_mean7 + POW25_7)).sqrt());

    let a1p = a1 * (1.0 + G);
    let a2p = a2 * (1.0 + G);

    let C1p = a1p.hypot(b1);
    let C2p = a2p.hypot(b2);
    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // Compute differences.
    let dLp = L2 - L1;
    let dCp = C2p - C1p;

    let Cp_product = C1p * C2p;
    let dhp = if Cp_product == 0.0 {
        0.0
    } else {
        let dh = h2p - h1p;
        if dh > 180.0 {
            dh - 360.0
        } else if dh < -180.0 {
            dh + 360.0
        } else {
            dh
        }
    };
    let dHp = 2.0 * Cp_product.sqrt() * (dhp.to_radians() / 2.0).sin();

    // Compute means.
    let Lp_mean = (L1 + L2) / 2.0;
    let Cp_mean = (C1p + C2p) / 2.0;
    let hp_mean = if Cp_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    // Compute weighting functions.
    let T = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let Lp_offset2 = (Lp_mean - 50.0).powi(2);
    let S_L = 1.0 + 0.015 * Lp_offset2 / (20.0 + Lp_offset2).sqrt();
    let S_C = 1.0 + 0.045 * Cp_mean;
    let S_H = 1.0 + 0.015 * Cp_mean * T;

    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let Cp_mean7 = Cp_mean.powi(7);
    let R_C = 2.0 * (Cp_mean7 / (Cp_mean7 + POW25_7)).sqrt();
    let R_T = -(2.0 * d_theta).to_radians().sin() * R_C;

    let term_L = dLp / S_L;
    let term_C = dCp / S_C;
    let term_H = dHp / S_H;

    (term_L * term_L + term_C * term_C + term_H * term_H + R_T * term_C * term_H)
        .max(0.0)
        .sqrt()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{delta_e_2000, delta_e_ok};

    #[test]
    fn test_delta_e_ok() {
        assert_eq!(delta_e_ok(&[0.5, 0.1, -0.1], &[0.5, 0.1, -0.1]), 0.0);
        assert!((delta_e_ok(&[0.0, 0.0, 0.0], &[0.3, 0.4, 0.0]) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_reference_pairs() {
        // Selected pairs from Sharma, Wu, and Dalal's test data.
        let pairs = [
            (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
            (50.0, 0.0, 0.0, 50.0, -1.0, 2.0, 2.3669),
            (50.0, 2.49, -0.001, 50.0, -2.49, 0.0009, 7.1792),
            (50.0, 2.49, -0.001, 50.0, -2.49, 0.0011, 7.2195),
            (50.0, -0.001, 2.49, 50.0, 0.0011, -2.49, 4.7461),
            (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
            (50.0, 2.5, 0.0, 56.0, -27.0, -3.0, 31.9030),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (22.7233, 20.0904, -46.694, 23.0331, 14.973, -42.5619, 2.0373),
            (90.9257, -0.5406, -0.9208, 88.6381, -0.8985, -0.7239, 1.5381),
            (2.0776, 0.0795, -1.135, 0.9033, -0.0636, -0.5514, 0.9082),
        ];

        for (index, &(l1, a1, b1, l2, a2, b2, expected)) in pairs.iter().enumerate() {
            let forward = delta_e_2000(&[l1, a1, b1], &[l2, a2, b2]);
            let backward = delta_e_2000(&[l2, a2, b2], &[l1, a1, b1]);
            assert!(
                (forward - expected).abs() < 0.0001,
                "pair {}: {} vs {}",
                index,
                forward,
                expected
            );
            assert!((forward - backward).abs() < 1e-12, "pair {}", index);
        }
    }

    #[test]
    fn test_scenario() {
        let delta = delta_e_2000(
            &[22.7233, 20.0904, -46.6940],
            &[23.0331, 14.9730, -42.5619],
        );
        assert!((delta - 2.0372582697089734).abs() < 1e-9, "{}", delta);
        assert_eq!(delta_e_2000(&[50.0, 10.0, 10.0], &[50.0, 10.0, 10.0]), 0.0);
    }
}
