mod channel;
mod conversion;
mod difference;
mod equality;
mod gamut;
mod math;
mod space;
mod string;

// channel
pub(crate) use channel::{channels, Channel, ALPHA};

// conversion
pub(crate) use conversion::{convert, from_24bit, to_24bit, to_8bit};

// difference
pub(crate) use difference::{delta_e_2000, delta_e_ok};

// equality
#[cfg(test)]
pub(crate) use equality::assert_close;
#[cfg(feature = "pyffi")]
pub use equality::close_enough;
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_hue_bits;

// gamut
pub(crate) use gamut::{clip, in_gamut, to_gamut};

// space
pub use space::{ColorModel, ColorSpace, SpaceKind, WhitePoint};

// string
pub(crate) use string::{format, format_hex, format_minified, format_number};
