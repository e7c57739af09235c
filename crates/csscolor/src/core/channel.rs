use super::space::{ColorModel, ColorSpace, SpaceKind};
use crate::component::{Component, Unit};
use crate::error::ColorError;
use crate::Float;

/// The kind of a channel, which determines the acceptable units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ChannelKind {
    /// A hue, which accepts angles and numbers, with numbers in degrees.
    Hue,
    /// Alpha, which accepts numbers and percentages and is always clamped.
    Alpha,
    /// Any other channel, which accepts numbers and percentages.
    Plain,
}

/// The description of a color channel.
///
/// A channel determines how a component's number or percentage maps to the
/// coordinate consumed by conversion, which range literal percentages must
/// fall into, and which unit conversion results use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Channel {
    /// The CSS channel keyword.
    pub name: &'static str,
    pub kind: ChannelKind,
    /// The ratio for resolving plain numbers.
    pub number_scale: Ratio,
    /// The ratio for resolving percentages.
    pub percent_scale: Ratio,
    /// The range for literal percentages.
    pub percent_range: (f64, f64),
    /// Whether conversion results use percentages for this channel.
    pub percent_output: bool,
}

/// A ratio of multiplier and divisor.
///
/// Keeping the divisor separate ensures that, e.g., 255 resolves to exactly 1
/// for `rgb()` channels.
pub(crate) type Ratio = (f64, f64);

#[inline]
fn scale(value: f64, ratio: Ratio) -> f64 {
    value * ratio.0 / ratio.1
}

#[inline]
fn unscale(value: f64, ratio: Ratio) -> f64 {
    value * ratio.1 / ratio.0
}

const NEUTRAL: Ratio = (1.0, 1.0);
const PERCENT: Ratio = (1.0, 100.0);

const UNBOUNDED: (f64, f64) = (f64::NEG_INFINITY, f64::INFINITY);
const UNIT: (f64, f64) = (0.0, 100.0);
const POSITIVE: (f64, f64) = (0.0, f64::INFINITY);

const fn plain(
    name: &'static str,
    number_scale: Ratio,
    percent_scale: Ratio,
    percent_range: (f64, f64),
) -> Channel {
    Channel {
        name,
        kind: ChannelKind::Plain,
        number_scale,
        percent_scale,
        percent_range,
        percent_output: false,
    }
}

const fn percent_first(name: &'static str, number_scale: Ratio) -> Channel {
    Channel {
        name,
        kind: ChannelKind::Plain,
        number_scale,
        percent_scale: PERCENT,
        percent_range: UNIT,
        percent_output: true,
    }
}

const HUE: Channel = Channel {
    name: "h",
    kind: ChannelKind::Hue,
    number_scale: NEUTRAL,
    percent_scale: NEUTRAL,
    percent_range: UNBOUNDED,
    percent_output: false,
};

/// The alpha channel, which is the same for all color models.
pub(crate) const ALPHA: Channel = Channel {
    name: "alpha",
    kind: ChannelKind::Alpha,
    number_scale: NEUTRAL,
    percent_scale: PERCENT,
    percent_range: UNIT,
    percent_output: false,
};

const RGB_FUNCTION: [Channel; 3] = [
    percent_first("r", (1.0, 255.0)),
    percent_first("g", (1.0, 255.0)),
    percent_first("b", (1.0, 255.0)),
];

const RGB_COLOR: [Channel; 3] = [
    plain("r", NEUTRAL, PERCENT, UNBOUNDED),
    plain("g", NEUTRAL, PERCENT, UNBOUNDED),
    plain("b", NEUTRAL, PERCENT, UNBOUNDED),
];

const XYZ: [Channel; 3] = [
    plain("x", NEUTRAL, PERCENT, UNBOUNDED),
    plain("y", NEUTRAL, PERCENT, UNBOUNDED),
    plain("z", NEUTRAL, PERCENT, UNBOUNDED),
];

const HSL: [Channel; 3] = [HUE, percent_first("s", PERCENT), percent_first("l", PERCENT)];

const HWB: [Channel; 3] = [HUE, percent_first("w", PERCENT), percent_first("b", PERCENT)];

const LAB: [Channel; 3] = [
    plain("l", NEUTRAL, NEUTRAL, UNIT),
    plain("a", NEUTRAL, (1.25, 1.0), UNBOUNDED),
    plain("b", NEUTRAL, (1.25, 1.0), UNBOUNDED),
];

const LCH: [Channel; 3] = [
    plain("l", NEUTRAL, NEUTRAL, UNIT),
    plain("c", NEUTRAL, (1.5, 1.0), POSITIVE),
    HUE,
];

const OKLAB: [Channel; 3] = [
    plain("l", NEUTRAL, PERCENT, UNIT),
    plain("a", NEUTRAL, (0.4, 100.0), UNBOUNDED),
    plain("b", NEUTRAL, (0.4, 100.0), UNBOUNDED),
];

const OKLCH: [Channel; 3] = [
    plain("l", NEUTRAL, PERCENT, UNIT),
    plain("c", NEUTRAL, (0.4, 100.0), POSITIVE),
    HUE,
];

const CUSTOM: [Channel; 3] = [
    plain("c1", NEUTRAL, PERCENT, UNBOUNDED),
    plain("c2", NEUTRAL, PERCENT, UNBOUNDED),
    plain("c3", NEUTRAL, PERCENT, UNBOUNDED),
];

/// Get the channels for the color model and color space.
///
/// A space of `None` stands for a custom color space.
pub(crate) fn channels(model: ColorModel, space: Option<ColorSpace>) -> &'static [Channel; 3] {
    let Some(space) = space else {
        return &CUSTOM;
    };

    match (model, space.kind()) {
        (ColorModel::Rgb, _) => &RGB_FUNCTION,
        (_, SpaceKind::Rgb) => &RGB_COLOR,
        (_, SpaceKind::Xyz) => &XYZ,
        (_, SpaceKind::Hsl) => &HSL,
        (_, SpaceKind::Hwb) => &HWB,
        (_, SpaceKind::Lab) if space.is_ok() => &OKLAB,
        (_, SpaceKind::Lab) => &LAB,
        (_, SpaceKind::Lch) if space.is_ok() => &OKLCH,
        (_, SpaceKind::Lch) => &LCH,
    }
}

impl Channel {
    /// Determine whether this channel is a hue.
    pub fn is_hue(&self) -> bool {
        self.kind == ChannelKind::Hue
    }

    /// Validate the component for this channel.
    ///
    /// This method returns the component to store, which differs from the
    /// argument only if the component needs clamping. Alpha always is clamped.
    /// Other percentages are clamped if computed and rejected if literal.
    pub fn check(&self, component: Component) -> Result<Component, ColorError> {
        let value = component.value();
        if !value.is_finite() {
            return Err(ColorError::InvalidRange {
                channel: self.name,
                value: value as f64,
            });
        }

        let unit = component.unit();
        let acceptable = match self.kind {
            ChannelKind::Hue => unit == Unit::Number || unit.is_angle(),
            ChannelKind::Alpha | ChannelKind::Plain => {
                unit == Unit::Number || unit == Unit::Percent
            }
        };
        if !acceptable {
            return Err(ColorError::TypeMismatch { channel: self.name });
        }

        if self.kind == ChannelKind::Alpha {
            let max = if unit == Unit::Percent { 100.0 } else { 1.0 };
            return Ok(component.with_value(value.clamp(0.0, max)));
        }

        if unit == Unit::Percent {
            let (min, max) = self.percent_range;
            let percent = value as f64;
            if percent < min || max < percent {
                if component.is_computed() {
                    return Ok(component.with_value(percent.clamp(min, max) as Float));
                }
                return Err(ColorError::InvalidRange {
                    channel: self.name,
                    value: percent,
                });
            }
        }

        Ok(component)
    }

    /// Resolve the component to the coordinate used by conversion.
    pub fn resolve(&self, component: &Component) -> f64 {
        let value = component.value() as f64;
        match component.unit() {
            Unit::Number if self.kind == ChannelKind::Hue => value,
            Unit::Number => scale(value, self.number_scale),
            Unit::Percent => scale(value, self.percent_scale),
            _ => component.to_degrees(),
        }
    }

    /// Create the component for the coordinate, using this channel's preferred
    /// unit.
    pub fn unresolve(&self, coordinate: f64) -> Component {
        if self.percent_output {
            Component::percent(unscale(coordinate, self.percent_scale) as Float)
        } else {
            Component::number(unscale(coordinate, self.number_scale) as Float)
        }
    }

    /// Convert the component to an equivalent component with the other of
    /// number and percentage. Angles are converted to plain numbers in
    /// degrees.
    pub fn alternative(&self, component: &Component) -> Option<Component> {
        let resolved = self.resolve(component);
        match component.unit() {
            Unit::Number if self.kind == ChannelKind::Hue => None,
            Unit::Number => Some(Component::percent(
                unscale(resolved, self.percent_scale) as Float,
            )),
            Unit::Percent => Some(Component::number(
                unscale(resolved, self.number_scale) as Float,
            )),
            _ => Some(Component::number(resolved as Float)),
        }
    }
}

// ====================================================================================================================
