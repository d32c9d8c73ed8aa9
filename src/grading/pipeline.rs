use crate::core::color::{Color, pack_argb};
use crate::core::gamma::linear_to_gamma;
use crate::core::tonemap::aces_film;
use crate::error::{GradingError, Result};
use crate::grading::adjust::{adjust_brightness, adjust_contrast, adjust_exposure, adjust_saturation};
use crate::grading::white_balance::{NEUTRAL_KELVIN, adjust_color_temperature};
use rayon::prelude::*;
use serde::Deserialize;

/// A full grading chain, applied in a fixed order:
/// exposure -> white balance -> saturation (linear HDR), then ACES,
/// then contrast -> brightness (display range), then gamma encode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GradingSettings {
    /// Exposure in EV stops.
    pub exposure: f32,
    /// White balance temperature in Kelvin.
    pub temperature: f32,
    pub saturation: f32,
    pub contrast: f32,
    pub brightness: f32,
    /// Apply the ACES filmic curve.
    pub tonemap: bool,
    /// Encode the result with display gamma.
    pub gamma: bool,
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            exposure: 0.0,
            temperature: NEUTRAL_KELVIN,
            saturation: 1.0,
            contrast: 1.0,
            brightness: 1.0,
            tonemap: true,
            gamma: true,
        }
    }
}

impl GradingSettings {
    /// True when none of the adjustments change the color.
    /// Tone mapping and gamma are not considered adjustments.
    pub fn is_neutral(&self) -> bool {
        self.exposure == 0.0
            && self.temperature == NEUTRAL_KELVIN
            && self.saturation == 1.0
            && self.contrast == 1.0
            && self.brightness == 1.0
    }

    /// Runs one linear HDR color through the whole chain.
    pub fn grade(&self, color: Color) -> Color {
        let mut c = adjust_exposure(color, self.exposure);
        c = adjust_color_temperature(c, self.temperature);
        c = adjust_saturation(c, self.saturation);

        if self.tonemap {
            c = aces_film(c);
        }

        c = adjust_contrast(c, self.contrast);
        c = adjust_brightness(c, self.brightness);

        if self.gamma {
            // Saturation can push channels slightly negative when tone
            // mapping is off; the gamma curve has no value there.
            c = linear_to_gamma(c.map(|v| v.max(0.0)));
        }
        c
    }

    /// Grades a buffer of pixels in place.
    pub fn grade_buffer(&self, pixels: &mut [Color]) {
        pixels.par_iter_mut().for_each(|p| *p = self.grade(*p));
    }

    /// Post-processing: Grade -> 0xAARRGGBB buffer, one row per task.
    pub fn post_process_to_buffer(&self, src: &[Color], width: usize, dst: &mut [u32]) -> Result<()> {
        if src.len() != dst.len() {
            return Err(GradingError::InvalidArgument(format!(
                "source has {} pixels but destination has {}",
                src.len(),
                dst.len()
            )));
        }
        if width == 0 || src.len() % width != 0 {
            return Err(GradingError::InvalidArgument(format!(
                "width {} does not divide a buffer of {} pixels",
                width,
                src.len()
            )));
        }

        dst.par_chunks_mut(width)
            .zip(src.par_chunks(width))
            .for_each(|(row_out, row_in)| {
                for (pixel, color) in row_out.iter_mut().zip(row_in) {
                    *pixel = pack_argb(self.grade(*color));
                }
            });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral_and_matches_tonemap_then_gamma() {
        let settings = GradingSettings::default();
        assert!(settings.is_neutral());

        let c = Color::new(0.8, 0.3, 0.1);
        let expected = linear_to_gamma(aces_film(c));
        assert!((settings.grade(c) - expected).norm() < 1e-4);
    }

    #[test]
    fn test_exposure_applies_before_tonemap() {
        let settings = GradingSettings {
            exposure: 1.0,
            gamma: false,
            ..Default::default()
        };
        assert!(!settings.is_neutral());

        let out = settings.grade(Color::repeat(0.25));
        assert!((out - aces_film(Color::repeat(0.5))).norm() < 1e-4);
    }

    #[test]
    fn test_passthrough_chain_is_identity_in_ldr() {
        let settings = GradingSettings {
            tonemap: false,
            gamma: false,
            ..Default::default()
        };
        let c = Color::new(0.2, 0.4, 0.6);
        assert!((settings.grade(c) - c).norm() < 1e-4);
    }

    #[test]
    fn test_grade_buffer_matches_grade() {
        let settings = GradingSettings {
            saturation: 1.4,
            temperature: 4500.0,
            ..Default::default()
        };
        let src: Vec<Color> = (0..64).map(|i| Color::new(i as f32 / 16.0, 0.5, 0.1)).collect();
        let mut buf = src.clone();
        settings.grade_buffer(&mut buf);
        for (a, b) in buf.iter().zip(&src) {
            assert_eq!(*a, settings.grade(*b));
        }
    }

    #[test]
    fn test_post_process_to_buffer() {
        let settings = GradingSettings::default();
        let src = vec![Color::zeros(), Color::repeat(1000.0), Color::zeros(), Color::repeat(1000.0)];
        let mut dst = vec![0u32; 4];
        settings.post_process_to_buffer(&src, 2, &mut dst).unwrap();
        assert_eq!(dst, vec![0xFF000000, 0xFFFFFFFF, 0xFF000000, 0xFFFFFFFF]);
    }

    #[test]
    fn test_post_process_rejects_bad_shapes() {
        let settings = GradingSettings::default();
        let src = vec![Color::zeros(); 6];

        let mut short = vec![0u32; 5];
        assert!(matches!(
            settings.post_process_to_buffer(&src, 3, &mut short),
            Err(GradingError::InvalidArgument(_))
        ));

        let mut dst = vec![0u32; 6];
        assert!(settings.post_process_to_buffer(&src, 4, &mut dst).is_err());
        assert!(settings.post_process_to_buffer(&src, 0, &mut dst).is_err());
    }
}
