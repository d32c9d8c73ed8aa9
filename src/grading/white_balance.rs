//! White balance from a Kelvin color temperature.
//!
//! The blackbody response is Tanner Helland's piecewise fit, evaluated on the
//! temperature in hundreds of Kelvin. The tint is the ratio between the
//! response at the target temperature and at the D65 reference (6500 K).

use crate::core::color::Color;

/// D65 reference white, the temperature at which the tint is neutral.
pub const NEUTRAL_KELVIN: f32 = 6500.0;

/// Temperatures the fit is tuned for. Values outside still evaluate.
pub const KELVIN_RANGE: (f32, f32) = (1000.0, 40000.0);

const DIVISOR_FLOOR: f32 = 0.001;

/// Below this, the fit's red channel is already pinned at 1 and gets boosted.
const WARM_BOOST_KELVIN: f32 = 3000.0;
/// Above this, the fit's blue channel is already pinned at 1 and gets boosted.
const COOL_BOOST_KELVIN: f32 = 10000.0;

/// Approximate blackbody color at `kelvin`, each channel in [0, 1].
#[allow(clippy::excessive_precision)]
pub fn blackbody_rgb(kelvin: f32) -> Color {
    let temp = kelvin / 100.0;

    let red = if temp <= 66.0 {
        1.0
    } else {
        let r = 329.698727446 * (temp - 60.0).powf(-0.1332047592);
        (r / 255.0).clamp(0.0, 1.0)
    };

    let green = if temp <= 66.0 {
        let g = 99.4708025861 * temp.ln() - 161.1195681661;
        (g / 255.0).clamp(0.0, 1.0)
    } else {
        let g = 288.1221695283 * (temp - 60.0).powf(-0.0755148492);
        (g / 255.0).clamp(0.0, 1.0)
    };

    let blue = if temp >= 66.0 {
        1.0
    } else if temp <= 19.0 {
        0.0
    } else {
        let b = 138.5177312231 * (temp - 10.0).ln() - 305.0447927307;
        (b / 255.0).clamp(0.0, 1.0)
    };

    Color::new(red, green, blue)
}

/// Per-channel multipliers that shift a neutral color toward `kelvin`.
///
/// The factors are not clamped: they scale the input rather than replace it.
pub fn white_balance_factors(kelvin: f32) -> Color {
    let target = blackbody_rgb(kelvin);
    let neutral = blackbody_rgb(NEUTRAL_KELVIN);

    let mut factors = target.zip_map(&neutral, |t, n| t / n.max(DIVISOR_FLOOR));

    // The fit saturates red for warm light and blue for cool light,
    // so those ends get a gentle extra push.
    if kelvin < WARM_BOOST_KELVIN {
        factors.x *= 1.0 + (WARM_BOOST_KELVIN - kelvin) / 10000.0;
    }
    if kelvin > COOL_BOOST_KELVIN {
        factors.z *= 1.0 + (kelvin - COOL_BOOST_KELVIN) / 30000.0;
    }

    factors
}

/// Tints `color` as if lit by a blackbody at `kelvin`.
///
/// No clamping is applied; tone map or clamp downstream.
pub fn adjust_color_temperature(color: Color, kelvin: f32) -> Color {
    color.component_mul(&white_balance_factors(kelvin))
}
