use nalgebra::Vector3;

/// An RGB color with floating-point channels.
///
/// Linear/HDR colors range over [0, +inf); display colors are expected in
/// [0, 1] but are not required to be pre-clamped.
pub type Color = Vector3<f32>;

/// Rec. 709 luminance weights.
pub const LUMA_REC709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Lengths at or below this are treated as degenerate and left unnormalized.
pub const NORMALIZE_EPSILON: f32 = 0.001;

/// Clamps a value to [0, 1].
#[inline(always)]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Relative luminance of a linear color using Rec. 709 weights.
pub fn luminance(color: Color) -> f32 {
    color.x * LUMA_REC709[0] + color.y * LUMA_REC709[1] + color.z * LUMA_REC709[2]
}

/// Normalizes `v` when its length exceeds [`NORMALIZE_EPSILON`], otherwise
/// returns it unchanged.
pub fn normalize_or_keep(v: Color) -> Color {
    let len = v.norm();
    if len > NORMALIZE_EPSILON { v / len } else { v }
}

/// Packs a display color into a 0xAARRGGBB word with opaque alpha.
pub fn pack_argb(color: Color) -> u32 {
    let r = (saturate(color.x) * 255.0) as u32;
    let g = (saturate(color.y) * 255.0) as u32;
    let b = (saturate(color.z) * 255.0) as u32;

    (255 << 24) | (r << 16) | (g << 8) | b
}
