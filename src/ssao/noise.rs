use crate::core::color::{Color, normalize_or_keep};
use crate::ssao::{NOISE_TILE_SIZE, SamplingRng};
use log::debug;
use rand::{Rng, SeedableRng};

/// A 4x4 tile of XY rotation vectors, row-major.
pub type NoiseTile = [Color; NOISE_TILE_SIZE * NOISE_TILE_SIZE];

/// Generates the SSAO rotation-noise tile from a seed.
///
/// Builds its own generator, so it never perturbs a kernel generator.
pub fn generate_ssao_noise(seed: u64) -> NoiseTile {
    let mut rng = SamplingRng::seed_from_u64(seed);
    generate_ssao_noise_with(&mut rng)
}

/// Generates the SSAO rotation-noise tile from a caller-owned generator.
///
/// Every entry is a direction in the XY plane (z = 0), unit length unless
/// the raw draw was shorter than the normalization epsilon.
pub fn generate_ssao_noise_with<R: Rng>(rng: &mut R) -> NoiseTile {
    let mut tile = [Color::zeros(); NOISE_TILE_SIZE * NOISE_TILE_SIZE];

    for texel in tile.iter_mut() {
        let x = rng.random::<f32>() * 2.0 - 1.0;
        let y = rng.random::<f32>() * 2.0 - 1.0;

        // z is zero, so the full length is the XY length.
        *texel = normalize_or_keep(Color::new(x, y, 0.0));
    }

    debug!("Generated {}x{} SSAO noise tile", NOISE_TILE_SIZE, NOISE_TILE_SIZE);
    tile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssao::kernel::generate_ssao_kernel_with;

    #[test]
    fn test_noise_is_unit_xy() {
        let tile = generate_ssao_noise(42);
        assert_eq!(tile.len(), 16);
        for v in &tile {
            assert_eq!(v.z, 0.0);
            assert!((v.xy().norm() - 1.0).abs() < 1e-4, "not unit: {:?}", v);
        }
    }

    #[test]
    fn test_noise_is_deterministic() {
        assert_eq!(generate_ssao_noise(3), generate_ssao_noise(3));
        assert_ne!(generate_ssao_noise(3), generate_ssao_noise(4));
    }

    #[test]
    fn test_noise_does_not_disturb_kernel() {
        let mut rng = SamplingRng::seed_from_u64(11);
        let expected = generate_ssao_kernel_with(16, &mut rng).unwrap();

        // A noise tile generated in between uses its own generator.
        let _ = generate_ssao_noise(11);
        let mut rng = SamplingRng::seed_from_u64(11);
        assert_eq!(generate_ssao_kernel_with(16, &mut rng).unwrap(), expected);
    }
}
