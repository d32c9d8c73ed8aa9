use crate::core::color::{Color, saturate};

/// ACES (Academy Color Encoding System) filmic tone mapping curve.
/// Maps high dynamic range (HDR) values to [0, 1] range with a film-like look.
///
/// This is Narkowicz's 2015 rational fit, applied to each channel
/// independently. Negative input is clamped to zero before the curve.
pub fn aces_film(color: Color) -> Color {
    color.map(aces_curve)
}

/// The scalar ACES curve for a single channel.
#[inline]
pub fn aces_curve(v: f32) -> f32 {
    let a = 2.51;
    let b = 0.03;
    let c = 2.43;
    let d = 0.59;
    let e = 0.14;

    let v = v.max(0.0);
    saturate((v * (a * v + b)) / (v * (c * v + d) + e))
}
