//! Screen-space ambient occlusion sampling tables.
//!
//! The kernel and noise tables are generated once (or when quality settings
//! change) and uploaded to the GPU. [`occlusion::calculate_ssao_occlusion`]
//! is the CPU reference of the per-pixel depth comparison the shader runs.

pub mod kernel;
pub mod noise;
pub mod occlusion;
pub mod settings;

use rand_xoshiro::Xoshiro256PlusPlus;

/// Generator behind the seeded table functions.
///
/// Its output for a given seed is fixed by the algorithm and identical on
/// every platform, which keeps baked tables reproducible.
pub type SamplingRng = Xoshiro256PlusPlus;

/// Revision of the table generation scheme.
///
/// Bump this whenever the generator, the draw order or a default seed
/// changes, since every such change alters the rendered result.
pub const SAMPLING_TABLE_VERSION: u32 = 1;

/// Default seed for [`kernel::generate_ssao_kernel`].
pub const DEFAULT_KERNEL_SEED: u64 = 12345;

/// Default seed for [`noise::generate_ssao_noise`].
pub const DEFAULT_NOISE_SEED: u64 = 54321;

/// Edge length of the square noise tile.
pub const NOISE_TILE_SIZE: usize = 4;
