use super::math::{multiply, normalize_hue, Matrix};
use super::space::{ColorSpace, WhitePoint};

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [f64; 3] {
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates are in-gamut RGB coordinates,
/// i.e., that they range `0..=1`. Even if that is not the case, the conversion
/// clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[f64; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [to_8bit(r), to_8bit(g), to_8bit(b)]
}

/// Convert a unit-range value to a byte, clamping out-of-range values.
#[inline]
pub(crate) fn to_8bit(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// The transfer function of an RGB color space.
///
/// All transfer functions are extended to negative values by reflection, so
/// that out-of-gamut coordinates survive conversion to linear light and back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Transfer {
    /// The identity.
    Linear,
    /// sRGB's piecewise gamma, which is also used by Display P3.
    Srgb,
    /// Rec. 2020's piecewise gamma.
    Rec2020,
    /// Adobe RGB's pure gamma of 563/256.
    A98,
    /// ProPhoto RGB's gamma of 1.8 with a linear toe.
    ProPhoto,
}

#[allow(clippy::excessive_precision)]
const REC2020_ALPHA: f64 = 1.09929682680944;
#[allow(clippy::excessive_precision)]
const REC2020_BETA: f64 = 0.018053968510807;

impl Transfer {
    /// Convert a gamma-encoded coordinate to linear light.
    pub fn to_linear(&self, value: f64) -> f64 {
        let magnitude = value.abs();

        match *self {
            Self::Linear => value,
            Self::Srgb => {
                if magnitude <= 0.04045 {
                    value / 12.92
                } else {
                    ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
                }
            }
            Self::Rec2020 => {
                if magnitude < REC2020_BETA * 4.5 {
                    value / 4.5
                } else {
                    ((magnitude + REC2020_ALPHA - 1.0) / REC2020_ALPHA)
                        .powf(0.45_f64.recip())
                        .copysign(value)
                }
            }
            Self::A98 => magnitude.powf(563.0 / 256.0).copysign(value),
            Self::ProPhoto => {
                if magnitude <= 16.0 / 512.0 {
                    value / 16.0
                } else {
                    magnitude.powf(1.8).copysign(value)
                }
            }
        }
    }

    /// Convert a linear-light coordinate to its gamma-encoded form.
    pub fn from_linear(&self, value: f64) -> f64 {
        let magnitude = value.abs();

        match *self {
            Self::Linear => value,
            Self::Srgb => {
                if magnitude <= 0.0031308 {
                    value * 12.92
                } else {
                    magnitude
                        .powf(1.0 / 2.4)
                        .mul_add(1.055, -0.055)
                        .copysign(value)
                }
            }
            Self::Rec2020 => {
                if magnitude < REC2020_BETA {
                    value * 4.5
                } else {
                    REC2020_ALPHA
                        .mul_add(magnitude.powf(0.45), -(REC2020_ALPHA - 1.0))
                        .copysign(value)
                }
            }
            Self::A98 => magnitude.powf(256.0 / 563.0).copysign(value),
            Self::ProPhoto => {
                if magnitude < 1.0 / 512.0 {
                    value * 16.0
                } else {
                    magnitude.powf(1.0 / 1.8).copysign(value)
                }
            }
        }
    }

    fn to_linear3(self, value: &[f64; 3]) -> [f64; 3] {
        [
            self.to_linear(value[0]),
            self.to_linear(value[1]),
            self.to_linear(value[2]),
        ]
    }

    fn from_linear3(self, value: &[f64; 3]) -> [f64; 3] {
        [
            self.from_linear(value[0]),
            self.from_linear(value[1]),
            self.from_linear(value[2]),
        ]
    }
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: Matrix = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: Matrix = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/p3-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_DISPLAY_P3_TO_XYZ: Matrix = [
    [ 0.4865709486482162, 0.26566769316909306, 0.1982172852343625 ],
    [ 0.2289745640697488, 0.6917385218365064,  0.079286914093745  ],
    [ 0.0000000000000000, 0.04511338185890264, 1.043944368900976  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_DISPLAY_P3: Matrix = [
    [  2.493496911941425,   -0.9313836179191239,  -0.40271078445071684  ],
    [ -0.8294889695615747,   1.7626640603183463,   0.023624685841943577 ],
    [  0.03584583024378447, -0.07617238926804182,  0.9568845240076872   ],
];

// https://github.com/w3c/csswg-drafts/blob/fba005e2ce9bcac55b49e4aa19b87208b3a0631e/css-color-4/conversions.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_A98_TO_XYZ: Matrix = [
    [ 0.5766690429101305,  0.1855582379065463,  0.1882286462349947  ],
    [ 0.29734497525053605, 0.6273635662554661,  0.07529145849399788 ],
    [ 0.02703136138641234, 0.07068885253582723, 0.9913375368376388  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_A98: Matrix = [
    [  2.0415879038107465,   -0.5650069742788596,  -0.34473135077832956 ],
    [ -0.9692436362808795,    1.8759675015077202,   0.04155505740717557 ],
    [  0.013444280632031142, -0.11836239223101838,  1.0151749943912054  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_PROPHOTO_TO_XYZ: Matrix = [
    [ 0.7977604896723027, 0.13518583717574031, 0.0313493495815248     ],
    [ 0.2880711282292934, 0.7118432178101014,  0.00008565396060525902 ],
    [ 0.0,                0.0,                 0.8251046025104601     ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_PROPHOTO: Matrix = [
    [  1.3457989731028281, -0.25558010007997534, -0.05110628506753401 ],
    [ -0.5446224939028347,  1.5082327413132781,   0.02053603239147973 ],
    [  0.0,                 0.0,                  1.2119675456389454  ],
];

// https://github.com/color-js/color.js/blob/main/src/spaces/rec2020-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_REC2020_TO_XYZ: Matrix = [
    [ 0.6369580483012914, 0.14461690358620832,  0.1688809751641721  ],
    [ 0.2627002120112671, 0.6779980715188708,   0.05930171646986196 ],
    [ 0.000000000000000,  0.028072693049087428, 1.060985057710791   ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_REC2020: Matrix = [
    [  1.7166511879712674,  -0.35567078377639233, -0.25336628137365974 ],
    [ -0.6666843518324892,   1.6164812366349395,   0.01576854581391113 ],
    [  0.017639857445310783, -0.042770613257808524, 0.9421031212354738 ],
];

/// Get the transfer function and to/from XYZ matrices for an RGB color space.
///
/// The matrices convert to and from XYZ with the color space's own white point.
fn rgb_profile(space: ColorSpace) -> Option<(Transfer, &'static Matrix, &'static Matrix)> {
    use ColorSpace::*;

    let profile = match space {
        Srgb => (Transfer::Srgb, &LINEAR_SRGB_TO_XYZ, &XYZ_TO_LINEAR_SRGB),
        SrgbLinear => (Transfer::Linear, &LINEAR_SRGB_TO_XYZ, &XYZ_TO_LINEAR_SRGB),
        DisplayP3 => (
            Transfer::Srgb,
            &LINEAR_DISPLAY_P3_TO_XYZ,
            &XYZ_TO_LINEAR_DISPLAY_P3,
        ),
        A98Rgb => (Transfer::A98, &LINEAR_A98_TO_XYZ, &XYZ_TO_LINEAR_A98),
        ProphotoRgb => (
            Transfer::ProPhoto,
            &LINEAR_PROPHOTO_TO_XYZ,
            &XYZ_TO_LINEAR_PROPHOTO,
        ),
        Rec2020 => (
            Transfer::Rec2020,
            &LINEAR_REC2020_TO_XYZ,
            &XYZ_TO_LINEAR_REC2020,
        ),
        _ => return None,
    };

    Some(profile)
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/w3c/csswg-drafts/blob/fba005e2ce9bcac55b49e4aa19b87208b3a0631e/css-color-4/conversions.js#L370

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: Matrix = [
    [ 0.99999999845051981432,  0.39633779217376785678,  0.21580375806075880339 ],
    [ 1.0000000088817607767,  -0.1055613423236563494,  -0.063854174771705903402 ],
    [ 1.0000000546724109177,  -0.089484182094965759684, -1.2914855378640917399 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: Matrix = [
    [  1.2270138511035211, -0.5577999806518222,  0.2812561489664678 ],
    [ -0.0405801784232806,  1.1122568696168302, -0.0716766786656012 ],
    [ -0.0763812845057069, -0.4214819784180127,  1.5861632204407947 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: Matrix = [
    [ 0.8189330101, 0.3618667424, -0.1288597137 ],
    [ 0.0329845436, 0.9293118715,  0.0361456387 ],
    [ 0.0482003018, 0.2643662691,  0.6338517070 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: Matrix = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Convert coordinates for Oklab to XYZ D65.
pub(crate) fn oklab_to_xyz(value: &[f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l.powi(3), m.powi(3), s.powi(3)])
}

/// Convert coordinates for XYZ D65 to Oklab.
pub(crate) fn xyz_to_oklab(value: &[f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/w3c/csswg-drafts/blob/fba005e2ce9bcac55b49e4aa19b87208b3a0631e/css-color-4/conversions.js#L352

const LAB_K: f64 = 24389.0 / 27.0;
const LAB_E: f64 = 216.0 / 24389.0;

/// Convert coordinates for CIE Lab to XYZ D50.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz(value: &[f64; 3]) -> [f64; 3] {
    let [L, a, b] = *value;

    let f1 = (L + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let x = if f0.powi(3) > LAB_E {
        f0.powi(3)
    } else {
        (116.0 * f0 - 16.0) / LAB_K
    };
    let y = if L > LAB_K * LAB_E {
        f1.powi(3)
    } else {
        L / LAB_K
    };
    let z = if f2.powi(3) > LAB_E {
        f2.powi(3)
    } else {
        (116.0 * f2 - 16.0) / LAB_K
    };

    let [wx, wy, wz] = WhitePoint::D50.xyz();
    [x * wx, y * wy, z * wz]
}

/// Convert coordinates for XYZ D50 to CIE Lab.
pub(crate) fn xyz_to_lab(value: &[f64; 3]) -> [f64; 3] {
    #[inline]
    fn f(t: f64) -> f64 {
        if t > LAB_E {
            t.cbrt()
        } else {
            LAB_K.mul_add(t, 16.0) / 116.0
        }
    }

    let [wx, wy, wz] = WhitePoint::D50.xyz();
    let f0 = f(value[0] / wx);
    let f1 = f(value[1] / wy);
    let f2 = f(value[2] / wz);

    [116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Cartesian to polar coordinates, i.e., Lab to LCh or Oklab to Oklch.
#[allow(non_snake_case)]
pub(crate) fn xab_to_xch(value: &[f64; 3]) -> [f64; 3] {
    let [L, a, b] = *value;

    // per herbie 2.1
    let a_m = a.abs();
    let C = if a_m < b { b.hypot(a_m) } else { a_m.hypot(b) };
    let h = normalize_hue(b.atan2(a).to_degrees());

    [L, C, h]
}

/// Convert polar to Cartesian coordinates, i.e., LCh to Lab or Oklch to Oklab.
#[allow(non_snake_case)]
pub(crate) fn xch_to_xab(value: &[f64; 3]) -> [f64; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

// --------------------------------------------------------------------------------------------------------------------
// https://drafts.csswg.org/css-color-4/#hsl-to-rgb

/// Convert HSL with unit-range saturation and lightness to sRGB.
fn hsl_to_srgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, s, l] = *value;
    let h = normalize_hue(h);
    let a = s * l.min(1.0 - l);

    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };

    [f(0.0), f(8.0), f(4.0)]
}

/// Convert sRGB to HSL with unit-range saturation and lightness.
///
/// Achromatic colors have a hue of zero. A negative saturation, which results
/// from out-of-gamut inputs, is flipped by rotating the hue.
fn srgb_to_hsl(value: &[f64; 3]) -> [f64; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    let mut h = 0.0;
    let mut s = 0.0;

    if d != 0.0 {
        s = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (max - l) / l.min(1.0 - l)
        };

        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h *= 60.0;
    }

    if s < 0.0 {
        s = -s;
        h += 180.0;
    }

    [normalize_hue(h), s, l]
}

/// Convert HWB with unit-range whiteness and blackness to sRGB.
fn hwb_to_srgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, w, b] = *value;

    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray, gray, gray];
    }

    let [r, g, bl] = hsl_to_srgb(&[h, 1.0, 0.5]);
    let scale = 1.0 - w - b;
    [r.mul_add(scale, w), g.mul_add(scale, w), bl.mul_add(scale, w)]
}

/// Convert sRGB to HWB with unit-range whiteness and blackness.
fn srgb_to_hwb(value: &[f64; 3]) -> [f64; 3] {
    let [h, _, _] = srgb_to_hsl(value);
    let [r, g, b] = *value;
    [h, r.min(g).min(b), 1.0 - r.max(g).max(b)]
}

// --------------------------------------------------------------------------------------------------------------------
// https://github.com/w3c/csswg-drafts/blob/fba005e2ce9bcac55b49e4aa19b87208b3a0631e/css-color-4/conversions.js#L103
// D50_TO_D65 is the exact inverse of D65_TO_D50.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D65_TO_D50: Matrix = [
    [  1.0478112, 0.0228866, -0.0501270 ],
    [  0.0295424, 0.9904844, -0.0170491 ],
    [ -0.0092345, 0.0150436,  0.7521316 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const D50_TO_D65: Matrix = [
    [  0.9555766557726175,   -0.023039342822280328, 0.06316366838489788  ],
    [ -0.028289546919877128,  1.0099416211881922,   0.021007660860608603 ],
    [  0.012298179275775808, -0.02048300401658305,  1.329909890833968    ],
];

/// Adapt XYZ coordinates from one white point to another using the (linear)
/// Bradford method.
pub(crate) fn adapt(from: WhitePoint, to: WhitePoint, value: &[f64; 3]) -> [f64; 3] {
    match (from, to) {
        (WhitePoint::D65, WhitePoint::D50) => multiply(&D65_TO_D50, value),
        (WhitePoint::D50, WhitePoint::D65) => multiply(&D50_TO_D65, value),
        _ => *value,
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the coordinates to XYZ using the color space's own white point.
fn to_xyz(space: ColorSpace, value: &[f64; 3]) -> [f64; 3] {
    use ColorSpace::*;

    if let Some((transfer, to_xyz, _)) = rgb_profile(space) {
        return multiply(to_xyz, &transfer.to_linear3(value));
    }

    match space {
        Hsl => to_xyz(Srgb, &hsl_to_srgb(value)),
        Hwb => to_xyz(Srgb, &hwb_to_srgb(value)),
        Lab => lab_to_xyz(value),
        Lch => lab_to_xyz(&xch_to_xab(value)),
        Oklab => oklab_to_xyz(value),
        Oklch => oklab_to_xyz(&xch_to_xab(value)),
        _ => *value,
    }
}

/// Convert XYZ coordinates with the color space's own white point to the
/// color space.
fn from_xyz(space: ColorSpace, value: &[f64; 3]) -> [f64; 3] {
    use ColorSpace::*;

    if let Some((transfer, _, from_xyz)) = rgb_profile(space) {
        return transfer.from_linear3(&multiply(from_xyz, value));
    }

    match space {
        Hsl => srgb_to_hsl(&from_xyz(Srgb, value)),
        Hwb => srgb_to_hwb(&from_xyz(Srgb, value)),
        Lab => xyz_to_lab(value),
        Lch => xab_to_xch(&xyz_to_lab(value)),
        Oklab => xyz_to_oklab(value),
        Oklch => xab_to_xch(&xyz_to_oklab(value)),
        _ => *value,
    }
}

/// Convert the coordinates from one color space to another.
///
/// Conversions between color spaces on the same branch, e.g., from Lab to
/// LCh or from sRGB to HSL, are direct. All other conversions go through XYZ,
/// adapting the white point only if the two color spaces disagree on it.
/// This function does not check whether the result is in gamut for the
/// targeted color space.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_space: ColorSpace,
    to_space: ColorSpace,
    coordinates: &[f64; 3],
) -> [f64; 3] {
    use ColorSpace::*;

    // 1. Be done if color spaces are the same.
    if from_space == to_space {
        return *coordinates;
    }

    // 2. Handle in-branch conversions that don't go through root XYZ
    match (from_space, to_space) {
        (Srgb, SrgbLinear) => return Transfer::Srgb.to_linear3(coordinates),
        (SrgbLinear, Srgb) => return Transfer::Srgb.from_linear3(coordinates),
        (Srgb, Hsl) => return srgb_to_hsl(coordinates),
        (Hsl, Srgb) => return hsl_to_srgb(coordinates),
        (Srgb, Hwb) => return srgb_to_hwb(coordinates),
        (Hwb, Srgb) => return hwb_to_srgb(coordinates),
        (Hsl, Hwb) => return srgb_to_hwb(&hsl_to_srgb(coordinates)),
        (Hwb, Hsl) => return srgb_to_hsl(&hwb_to_srgb(coordinates)),
        (Lab, Lch) | (Oklab, Oklch) => return xab_to_xch(coordinates),
        (Lch, Lab) | (Oklch, Oklab) => return xch_to_xab(coordinates),
        _ => (),
    }

    // 3. Take the long way through XYZ
    let intermediate = to_xyz(from_space, coordinates);
    let intermediate = adapt(from_space.white_point(), to_space.white_point(), &intermediate);
    from_xyz(to_space, &intermediate)
}

// ====================================================================================================================
