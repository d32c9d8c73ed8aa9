use crate::core::color::{Color, lerp, normalize_or_keep};
use crate::error::{GradingError, Result};
use crate::ssao::SamplingRng;
use log::debug;
use rand::{Rng, SeedableRng};

/// Scale of the first (innermost) kernel sample.
const MIN_SAMPLE_SCALE: f32 = 0.1;
/// Scale approached by the last kernel sample.
const MAX_SAMPLE_SCALE: f32 = 1.0;

/// Generates an SSAO hemisphere kernel from a seed.
///
/// See [`generate_ssao_kernel_with`] for the sample layout. The same
/// `(sample_count, seed)` always yields the same table.
pub fn generate_ssao_kernel(sample_count: usize, seed: u64) -> Result<Vec<Color>> {
    let mut rng = SamplingRng::seed_from_u64(seed);
    generate_ssao_kernel_with(sample_count, &mut rng)
}

/// Generates an SSAO hemisphere kernel, drawing from a caller-owned generator.
///
/// Samples lie in the +Z hemisphere. Sample `i` has length
/// `lerp(0.1, 1.0, (i / sample_count)^2)`, so early samples cluster near the
/// origin and later ones reach out toward the full radius.
///
/// Each sample consumes exactly four draws from `rng`, in a fixed order.
pub fn generate_ssao_kernel_with<R: Rng>(sample_count: usize, rng: &mut R) -> Result<Vec<Color>> {
    if sample_count == 0 {
        return Err(GradingError::InvalidArgument(
            "SSAO kernel sample count must be greater than zero".to_string(),
        ));
    }

    let mut kernel = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let direction = Color::new(
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>(),
        );
        let direction = normalize_or_keep(direction);

        // The base scale draw is overridden below but still taken, so the
        // stream position of every later sample stays fixed.
        let _base_scale: f32 = rng.random();
        let scale = kernel_scale(i, sample_count);

        kernel.push(direction * scale);
    }

    debug!("Generated SSAO kernel with {} samples", sample_count);
    Ok(kernel)
}

/// Length bias for sample `index` of `sample_count`.
pub fn kernel_scale(index: usize, sample_count: usize) -> f32 {
    let t = index as f32 / sample_count as f32;
    lerp(MIN_SAMPLE_SCALE, MAX_SAMPLE_SCALE, t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_deterministic() {
        let a = generate_ssao_kernel(32, 7).unwrap();
        let b = generate_ssao_kernel(32, 7).unwrap();
        assert_eq!(a, b);

        let c = generate_ssao_kernel(32, 8).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_kernel_length_and_hemisphere() {
        for n in [1, 4, 16, 64] {
            let kernel = generate_ssao_kernel(n, 1234).unwrap();
            assert_eq!(kernel.len(), n);
            for sample in &kernel {
                assert!(sample.z >= 0.0, "sample below hemisphere: {:?}", sample);
                assert!(sample.iter().all(|c| c.is_finite()));
            }
        }
    }

    #[test]
    fn test_kernel_lengths_follow_scale() {
        let n = 16;
        let kernel = generate_ssao_kernel(n, 99).unwrap();
        for (i, sample) in kernel.iter().enumerate() {
            let len = sample.norm();
            // Normalized directions land exactly on the scale; degenerate
            // ones are shorter still.
            assert!(len <= kernel_scale(i, n) + 1e-5);
        }
    }

    #[test]
    fn test_kernel_scale_bias() {
        assert!((kernel_scale(0, 16) - 0.1).abs() < 1e-6);
        assert!(kernel_scale(0, 16) < kernel_scale(15, 16));
        for i in 1..16 {
            assert!(kernel_scale(i - 1, 16) < kernel_scale(i, 16));
        }
        assert!(kernel_scale(15, 16) < 1.0);
    }

    #[test]
    fn test_kernel_zero_samples_is_error() {
        assert!(matches!(
            generate_ssao_kernel(0, 1),
            Err(GradingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_kernel_uses_caller_generator() {
        let mut rng = SamplingRng::seed_from_u64(5);
        let first = generate_ssao_kernel_with(8, &mut rng).unwrap();
        let second = generate_ssao_kernel_with(8, &mut rng).unwrap();
        // The generator advanced, so the second table differs.
        assert_ne!(first, second);
        assert_eq!(first, generate_ssao_kernel(8, 5).unwrap());
    }
}
