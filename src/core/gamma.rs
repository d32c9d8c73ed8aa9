use crate::core::color::Color;

/// Display gamma used by both directions of the codec.
pub const DISPLAY_GAMMA: f32 = 2.2;

/// Converts linear RGB to display gamma (Gamma Correction).
/// Usually applied after tone mapping, as the last step before display.
///
/// Channels must be non-negative; a negative base has no real power and
/// yields NaN.
pub fn linear_to_gamma(color: Color) -> Color {
    let inv_gamma = 1.0 / DISPLAY_GAMMA;
    color.map(|c| c.powf(inv_gamma))
}

/// Converts display-gamma RGB back to linear.
pub fn gamma_to_linear(color: Color) -> Color {
    color.map(|c| c.powf(DISPLAY_GAMMA))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_endpoints() {
        assert!(linear_to_gamma(Color::zeros()).norm() < 0.001);
        assert!((linear_to_gamma(Color::repeat(1.0)) - Color::repeat(1.0)).norm() < 0.001);
        assert!(gamma_to_linear(Color::zeros()).norm() < 0.001);
        assert!((gamma_to_linear(Color::repeat(1.0)) - Color::repeat(1.0)).norm() < 0.001);
    }

    #[test]
    fn test_gamma_reference_values() {
        assert!((linear_to_gamma(Color::repeat(0.5)).x - 0.735).abs() < 0.01);
        assert!((linear_to_gamma(Color::repeat(0.18)).x - 0.461).abs() < 0.01);
        assert!((gamma_to_linear(Color::repeat(0.5)).x - 0.214).abs() < 0.01);
    }

    #[test]
    fn test_gamma_round_trip() {
        for i in 0..=20 {
            for j in 0..=4 {
                let c = Color::new(i as f32 / 20.0, j as f32 / 4.0, 1.0 - i as f32 / 20.0);
                let back = gamma_to_linear(linear_to_gamma(c));
                for k in 0..3 {
                    assert!((back[k] - c[k]).abs() < 0.01, "round trip drifted for {:?}", c);
                }
            }
        }
    }

    #[test]
    fn test_gamma_hdr_passes_through_curve() {
        assert!(linear_to_gamma(Color::repeat(2.0)).x > 1.0);
    }
}
