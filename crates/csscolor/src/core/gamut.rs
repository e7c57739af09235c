use super::conversion::{convert, xch_to_xab};
use super::difference::delta_e_ok;
use super::space::ColorSpace;
use crate::opt::MappingOptions;

/// Determine whether the coordinates are in gamut for their color space.
///
/// Coordinates of RGB color spaces are in gamut if they fall within the unit
/// range, give or take the tolerance. Coordinates of all other color spaces
/// are trivially in gamut.
pub(crate) fn in_gamut(space: ColorSpace, coordinates: &[f64; 3], tolerance: f64) -> bool {
    if space.is_rgb() {
        coordinates
            .iter()
            .all(|c| -tolerance <= *c && *c <= 1.0 + tolerance)
    } else {
        true
    }
}

/// Clip the coordinates to the gamut of their color space.
pub(crate) fn clip(space: ColorSpace, coordinates: &[f64; 3]) -> [f64; 3] {
    if space.is_rgb() {
        let [r, g, b] = coordinates;
        [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
    } else {
        *coordinates
    }
}

/// Map the given color coordinates into the gamut of their color space.
///
/// This function implements the CSS Color 4 [gamut mapping
/// algorithm](https://drafts.csswg.org/css-color/#css-gamut-mapping). It
/// basically performs a binary search in Oklch for a color with less chroma
/// than the original, whose clipped version is within the *just noticeable
/// difference*. Since, by definition, the clipped version also is in gamut, it
/// becomes the result of the search. Coordinates that are in gamut already are
/// returned unchanged.
pub(crate) fn to_gamut(
    space: ColorSpace,
    coordinates: &[f64; 3],
    options: &MappingOptions,
) -> [f64; 3] {
    use ColorSpace::*;

    let tolerance = options.tolerance();
    let jnd = options.jnd();
    let epsilon = options.epsilon();

    // If the color space is unbounded or the color in gamut, there is nothing to do
    if !space.is_rgb() || in_gamut(space, coordinates, tolerance) {
        return *coordinates;
    }

    // Clamp lightness
    let origin_as_oklch = convert(space, Oklch, coordinates);
    let l = origin_as_oklch[0];
    if 1.0 <= l {
        log::debug!("gamut mapping {:?} to white", coordinates);
        return clip(space, &convert(Oklch, space, &[1.0, 0.0, 0.0]));
    }
    if l <= 0.0 {
        log::debug!("gamut mapping {:?} to black", coordinates);
        return clip(space, &convert(Oklch, space, &[0.0, 0.0, 0.0]));
    }

    // Goal: Minimize just noticeable difference between current and clipped
    // colors
    let mut current_as_oklch = origin_as_oklch;
    let mut clipped_as_target = clip(space, &convert(Oklch, space, &current_as_oklch));

    let difference = delta_e_ok(
        &convert(space, Oklab, &clipped_as_target),
        &xch_to_xab(&current_as_oklch),
    );

    if difference < jnd {
        log::debug!(
            "gamut mapping {:?} by clipping with ΔE OK {:.6}",
            coordinates,
            difference
        );
        return clipped_as_target;
    }

    // Strategy: Binary search by adjusting chroma in Oklch
    let mut min = 0.0;
    let mut max = origin_as_oklch[1];
    let mut min_in_gamut = true;
    let mut iterations = 0;

    while epsilon < max - min && iterations < options.max_iterations() {
        iterations += 1;

        let chroma = (min + max) / 2.0;
        current_as_oklch = [current_as_oklch[0], chroma, current_as_oklch[2]];

        let current_as_target = convert(Oklch, space, &current_as_oklch);

        if min_in_gamut && in_gamut(space, &current_as_target, tolerance) {
            log::trace!("gamut mapping step {}: chroma {:.6} in gamut", iterations, chroma);
            min = chroma;
            continue;
        }

        clipped_as_target = clip(space, &current_as_target);

        let difference = delta_e_ok(
            &convert(space, Oklab, &clipped_as_target),
            &xch_to_xab(&current_as_oklch),
        );

        log::trace!(
            "gamut mapping step {}: chroma {:.6} with ΔE OK {:.6}",
            iterations,
            chroma,
            difference
        );

        if difference < jnd {
            if jnd - difference < epsilon {
                break;
            }
            min_in_gamut = false;
            min = chroma;
        } else {
            max = chroma;
        }
    }

    log::debug!(
        "gamut mapping {:?} to {:?} after {} steps",
        coordinates,
        clipped_as_target,
        iterations
    );

    clipped_as_target
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{clip, in_gamut, to_gamut};
    use crate::core::{assert_close, convert, ColorSpace};
    use crate::opt::MappingOptions;

    #[test]
    fn test_in_gamut() {
        assert!(in_gamut(ColorSpace::Srgb, &[1.00007, -0.00007, 0.5], 0.000075));
        assert!(!in_gamut(ColorSpace::Srgb, &[1.00007, -0.00007, 0.5], 0.0));
        assert!(!in_gamut(ColorSpace::DisplayP3, &[0.5, 0.5, -0.01], 0.000075));
        assert!(in_gamut(ColorSpace::Oklch, &[2.0, 5.0, 400.0], 0.0));
        assert_eq!(clip(ColorSpace::Srgb, &[1.5, -2.0, 0.3]), [1.0, 0.0, 0.3]);
        assert_eq!(clip(ColorSpace::Lab, &[150.0, -200.0, 3.0]), [150.0, -200.0, 3.0]);
    }

    #[test]
    fn test_gamut() {
        let options = MappingOptions::default();

        // A very green green.
        let p3 = [0.0, 1.0, 0.0];
        let srgb = convert(ColorSpace::DisplayP3, ColorSpace::Srgb, &p3);
        assert_close!(
            srgb,
            [-0.5116049825853448, 1.0182656579378029, -0.3106746212905826],
            1e-9
        );

        let srgb_mapped = to_gamut(ColorSpace::Srgb, &srgb, &options);
        assert_close!(
            srgb_mapped,
            [0.0, 0.9857586592177795, 0.15951747306055666],
            1e-9
        );

        // A very yellow yellow.
        let p3 = [1.0, 1.0, 0.0];
        let linear_srgb = convert(ColorSpace::DisplayP3, ColorSpace::SrgbLinear, &p3);
        assert_close!(
            linear_srgb,
            [1.0, 1.0000000000000002, -0.09827360014096621],
            1e-9
        );

        let linear_srgb_mapped = to_gamut(ColorSpace::SrgbLinear, &linear_srgb, &options);
        assert_close!(
            linear_srgb_mapped,
            [0.9914779298192219, 0.9977513156763479, 0.0],
            1e-9
        );
    }

    #[test]
    fn test_gamut_extremes() {
        let options = MappingOptions::default();

        let too_bright = convert(ColorSpace::Oklch, ColorSpace::Srgb, &[1.2, 0.2, 120.0]);
        assert_close!(
            to_gamut(ColorSpace::Srgb, &too_bright, &options),
            [1.0, 1.0, 1.0],
            1e-3
        );

        let too_dark = convert(ColorSpace::Oklch, ColorSpace::Srgb, &[-0.1, 0.2, 120.0]);
        assert_close!(
            to_gamut(ColorSpace::Srgb, &too_dark, &options),
            [0.0, 0.0, 0.0],
            1e-6
        );
    }

    #[test]
    fn test_gamut_idempotent() {
        let options = MappingOptions::default();
        let rec2020 = [0.0, 1.0, 0.2];
        let srgb = convert(ColorSpace::Rec2020, ColorSpace::Srgb, &rec2020);

        let once = to_gamut(ColorSpace::Srgb, &srgb, &options);
        assert!(in_gamut(ColorSpace::Srgb, &once, 0.0));
        assert_eq!(to_gamut(ColorSpace::Srgb, &once, &options), once);
    }
}
