//! Exposure, saturation, contrast and brightness adjustments.
//!
//! Each is a pure function of one color and one scalar. Exposure and
//! saturation operate in linear HDR space and do not clamp; contrast and
//! brightness are display-range operations and clamp to [0, 1]. The order in
//! which they are chained changes the result.

use crate::core::color::{Color, luminance, saturate};

/// Scales the color by `2^ev` photographic stops.
pub fn adjust_exposure(color: Color, ev: f32) -> Color {
    color * ev.exp2()
}

/// Moves each channel toward (`saturation < 1`) or away from
/// (`saturation > 1`) the Rec. 709 luminance.
///
/// `0.0` yields grayscale, `1.0` returns the input unchanged.
pub fn adjust_saturation(color: Color, saturation: f32) -> Color {
    let luma = luminance(color);
    color.map(|c| luma + saturation * (c - luma))
}

/// Scales distance from mid-gray (0.5), then clamps to [0, 1].
pub fn adjust_contrast(color: Color, contrast: f32) -> Color {
    color.map(|c| saturate((c - 0.5) * contrast + 0.5))
}

/// Multiplies every channel by `brightness`, then clamps to [0, 1].
pub fn adjust_brightness(color: Color, brightness: f32) -> Color {
    color.map(|c| saturate(c * brightness))
}
