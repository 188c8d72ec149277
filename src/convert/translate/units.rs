//! Unit and color conversion.

use crate::model::{Color, Margins};
use crate::source::Padding;

/// Paragraph-shape margins, indent and spacing are stored at double
/// resolution in the source.
pub const SOURCE_HALF_UNITS_PER_HWPUNIT: i32 = 2;

/// Source value meaning "no color".
const NO_COLOR: u32 = 0xFFFF_FFFF;

/// Divide rounding to the nearest integer, ties to even.
///
/// `divisor` must be positive.
pub fn div_round_half_even(value: i32, divisor: i32) -> i32 {
    debug_assert!(divisor > 0);
    let value = value as i64;
    let divisor = divisor as i64;
    let quotient = value.div_euclid(divisor);
    let twice_rem = value.rem_euclid(divisor) * 2;
    let rounded = if twice_rem > divisor || (twice_rem == divisor && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    };
    rounded as i32
}

/// Convert a half-HWPUNIT source length to HWPUNIT.
pub fn half_units(value: i32) -> i32 {
    div_round_half_even(value, SOURCE_HALF_UNITS_PER_HWPUNIT)
}

/// Convert a `0x00BBGGRR` source color.
pub fn color(value: u32) -> Color {
    if value == NO_COLOR {
        return Color::None;
    }
    let r = (value & 0xFF) as u8;
    let g = ((value >> 8) & 0xFF) as u8;
    let b = ((value >> 16) & 0xFF) as u8;
    Color::Rgb(r, g, b)
}

pub fn margins(padding: Padding) -> Margins {
    Margins {
        left: padding.left as i32,
        right: padding.right as i32,
        top: padding.top as i32,
        bottom: padding.bottom as i32,
    }
}
