use super::channel::{Channel, ALPHA};
use crate::component::Component;

/// Format the number with at most the given number of digits past the decimal.
///
/// CSS mandates NO trailing zeros whatsoever. But formatting floats with a
/// precision produces trailing zeros. Rounding avoids them, for the most part.
/// If the fractional part is zero, we do need an explicit precision---of zero!
/// Negative zero loses its sign.
pub(crate) fn format_number(value: f64, precision: usize) -> String {
    let factor = 10.0_f64.powi(precision.min(15) as i32);
    let mut n = (value * factor).round() / factor;
    if n == 0.0 {
        n = 0.0;
    }

    if n == n.trunc() {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Strip the leading zero from a formatted number.
fn strip_leading_zero(number: String) -> String {
    if let Some(rest) = number.strip_prefix("0.") {
        format!(".{}", rest)
    } else if let Some(rest) = number.strip_prefix("-0.") {
        format!("-.{}", rest)
    } else {
        number
    }
}

/// Format the component in its shortest equivalent form.
///
/// This function considers the component as given as well as the equivalent
/// number or percentage for the channel, preferring numbers on ties.
fn format_shortest(component: &Component, channel: &Channel, precision: usize) -> String {
    let format = |c: &Component| {
        let mut s = strip_leading_zero(format_number(c.value() as f64, precision));
        s.push_str(c.unit().suffix());
        s
    };

    let original = format(component);
    match channel.alternative(component) {
        None => original,
        Some(alternative) => {
            let alternative_str = format(&alternative);
            let prefer_alternative = alternative_str.len() < original.len()
                || (alternative_str.len() == original.len()
                    && alternative.unit() == crate::Unit::Number);
            if prefer_alternative {
                alternative_str
            } else {
                original
            }
        }
    }
}

/// Format the color as a string.
///
/// The prefix is the opening of the CSS function including the parenthesis
/// and, for `color()`, the color space identifier and a space. Components
/// appear in their specified units. Alpha appears only if requested. This
/// function respects the formatter's precision, defaulting to 5 digits past
/// the decimal.
pub(crate) fn format(
    prefix: &str,
    components: &[Component; 4],
    show_alpha: bool,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(5);
    f.write_str(prefix)?;

    for (index, component) in components[1..].iter().enumerate() {
        if 0 < index {
            f.write_str(" ")?;
        }
        f.write_str(&format_number(component.value() as f64, precision))?;
        f.write_str(component.unit().suffix())?;
    }

    if show_alpha {
        let alpha = &components[0];
        f.write_str(" / ")?;
        f.write_str(&format_number(alpha.value() as f64, precision))?;
        f.write_str(alpha.unit().suffix())?;
    }

    f.write_str(")")
}

/// Format the color as a minified string.
///
/// Compared to [`format`], this function strips leading zeros, omits the
/// spaces around the slash preceding alpha as well as before negative
/// components, and picks the shortest equivalent form for each component.
pub(crate) fn format_minified(
    prefix: &str,
    components: &[Component; 4],
    channels: &[Channel; 3],
    show_alpha: bool,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let precision = f.precision().unwrap_or(5);
    f.write_str(prefix)?;

    for (index, (component, channel)) in components[1..].iter().zip(channels).enumerate() {
        let formatted = format_shortest(component, channel, precision);
        // A minus sign already separates two numbers
        if 0 < index && !formatted.starts_with('-') {
            f.write_str(" ")?;
        }
        f.write_str(&formatted)?;
    }

    if show_alpha {
        f.write_str("/")?;
        f.write_str(&format_shortest(&components[0], &ALPHA, precision))?;
    }

    f.write_str(")")
}

/// Format the bytes as a hashed hexadecimal string.
///
/// This function uses the three (or four) digit short form if each byte
/// repeats the same hexadecimal digit.
pub(crate) fn format_hex(rgb: [u8; 3], alpha: Option<u8>) -> String {
    let [r, g, b] = rgb;
    let is_short = |byte: u8| byte >> 4 == byte & 0xf;

    if is_short(r) && is_short(g) && is_short(b) && alpha.map_or(true, is_short) {
        let mut s = format!("#{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf);
        if let Some(a) = alpha {
            s.push_str(&format!("{:x}", a & 0xf));
        }
        s
    } else {
        let mut s = format!("#{:02x}{:02x}{:02x}", r, g, b);
        if let Some(a) = alpha {
            s.push_str(&format!("{:02x}", a));
        }
        s
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, format_number, format_shortest, strip_leading_zero};
    use crate::core::channel::{channels, ALPHA};
    use crate::core::{ColorModel, ColorSpace};
    use crate::Component;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.3, 5), "0.3");
        assert_eq!(format_number(0.123456, 5), "0.12346");
        assert_eq!(format_number(0.123456, 2), "0.12");
        assert_eq!(format_number(167.0, 5), "167");
        assert_eq!(format_number(-0.000001, 5), "0");
        assert_eq!(format_number(-12.5, 0), "-13");
        assert_eq!(strip_leading_zero("0.25".to_string()), ".25");
        assert_eq!(strip_leading_zero("-0.25".to_string()), "-.25");
        assert_eq!(strip_leading_zero("10.25".to_string()), "10.25");
    }

    #[test]
    fn test_format_shortest() {
        let rgb = channels(ColorModel::Rgb, Some(ColorSpace::Srgb));
        assert_eq!(format_shortest(&Component::percent(100.0), &rgb[0], 5), "255");
        assert_eq!(format_shortest(&Component::percent(50.0), &rgb[0], 5), "50%");
        assert_eq!(format_shortest(&Component::number(0.0), &rgb[0], 5), "0");

        let hsl = channels(ColorModel::Hsl, Some(ColorSpace::Hsl));
        assert_eq!(format_shortest(&Component::degrees(120.0), &hsl[0], 5), "120");
        assert_eq!(
            format_shortest(&Component::new(0.5, crate::Unit::Turn), &hsl[0], 5),
            "180"
        );

        assert_eq!(format_shortest(&Component::percent(50.0), &ALPHA, 5), ".5");
        assert_eq!(format_shortest(&Component::number(0.25), &ALPHA, 5), ".25");
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex([0xff, 0, 0], None), "#f00");
        assert_eq!(format_hex([0xff, 0xca, 0], None), "#ffca00");
        assert_eq!(format_hex([0x11, 0x22, 0x33], Some(0x44)), "#1234");
        assert_eq!(format_hex([0x11, 0x22, 0x33], Some(0x80)), "#11223380");
    }
}
