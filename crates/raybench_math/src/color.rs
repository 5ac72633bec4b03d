//! Color type and display quantization.

use crate::DVec3;

/// Color type alias (RGB, unbounded while lighting accumulates).
///
/// `x`, `y`, `z` hold red, green and blue. Component-wise multiplication is
/// the `*` operator on two colors, scaling is `*` with an `f64`.
pub type Color = DVec3;

/// Quantize one channel for display.
///
/// Clamps to at most 1.0, scales to 255 and floors. There is no lower clamp
/// here: negative channels produce negative values, which the pixel sink
/// conversion in [`to_display_color`] handles.
///
/// NaN maps to 255, since `f64::min` returns the non-NaN operand. Shading a
/// ray that runs exactly parallel to a plane produces NaN channels, so such
/// pixels come out white.
#[inline]
pub fn display_channel(c: f64) -> i32 {
    (c.min(1.0) * 255.0).floor() as i32
}

/// Convert an accumulated color to an 8-bit RGB triple.
///
/// Each channel goes through [`display_channel`]; values below zero are
/// clamped to 0 to fit the `u8` sink contract.
pub fn to_display_color(color: Color) -> [u8; 3] {
    let quantize = |c: f64| display_channel(c).clamp(0, 255) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}
