use crate::core::color::Color;
use crate::error::Result;
use crate::ssao::kernel::generate_ssao_kernel;
use crate::ssao::noise::{NoiseTile, generate_ssao_noise};
use crate::ssao::{DEFAULT_KERNEL_SEED, DEFAULT_NOISE_SEED};
use log::warn;
use serde::Deserialize;

/// Fewest kernel samples the shader is given.
pub const MIN_SAMPLES: usize = 4;
/// Shader constant budget for the kernel.
pub const MAX_SAMPLES: usize = 64;

/// SSAO quality controls, as exposed to the renderer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SsaoSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// World-space search radius.
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_intensity")]
    pub intensity: f32,
    /// Depth bias against self-occlusion.
    #[serde(default = "default_bias")]
    pub bias: f32,
    /// Requested kernel size; see [`SsaoSettings::effective_samples`].
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_kernel_seed")]
    pub kernel_seed: u64,
    #[serde(default = "default_noise_seed")]
    pub noise_seed: u64,
}

impl Default for SsaoSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: default_radius(),
            intensity: default_intensity(),
            bias: default_bias(),
            samples: default_samples(),
            kernel_seed: default_kernel_seed(),
            noise_seed: default_noise_seed(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_radius() -> f32 {
    0.5
}
fn default_intensity() -> f32 {
    1.0
}
fn default_bias() -> f32 {
    0.025
}
fn default_samples() -> usize {
    16
}
fn default_kernel_seed() -> u64 {
    DEFAULT_KERNEL_SEED
}
fn default_noise_seed() -> u64 {
    DEFAULT_NOISE_SEED
}

impl SsaoSettings {
    /// The requested sample count, clamped to `[MIN_SAMPLES, MAX_SAMPLES]`.
    pub fn effective_samples(&self) -> usize {
        let clamped = self.samples.clamp(MIN_SAMPLES, MAX_SAMPLES);
        if clamped != self.samples {
            warn!(
                "SSAO sample count {} out of range, using {}",
                self.samples, clamped
            );
        }
        clamped
    }

    /// Packs `[radius, intensity, bias, samples]` for a single vec4 constant.
    pub fn shader_params(&self) -> [f32; 4] {
        [
            self.radius,
            self.intensity,
            self.bias,
            self.effective_samples() as f32,
        ]
    }

    /// Builds the kernel and noise tables for these settings.
    pub fn build_tables(&self) -> Result<SsaoTables> {
        let kernel = generate_ssao_kernel(self.effective_samples(), self.kernel_seed)?;
        let noise = generate_ssao_noise(self.noise_seed);
        Ok(SsaoTables { kernel, noise })
    }
}

/// The static SSAO tables that get uploaded to the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct SsaoTables {
    pub kernel: Vec<Color>,
    pub noise: NoiseTile,
}

impl SsaoTables {
    /// One vec4 per kernel sample, `w` unused and zero.
    pub fn kernel_constants(&self) -> Vec<[f32; 4]> {
        self.kernel.iter().map(|s| [s.x, s.y, s.z, 0.0]).collect()
    }

    /// RGBA8 texel data for the noise tile, row-major.
    ///
    /// Signed channels are mapped from [-1, 1] to [0, 255]; alpha is opaque.
    pub fn noise_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.noise.len() * 4);
        for v in &self.noise {
            data.push(snorm_to_unorm8(v.x));
            data.push(snorm_to_unorm8(v.y));
            data.push(snorm_to_unorm8(v.z));
            data.push(255);
        }
        data
    }
}

fn snorm_to_unorm8(v: f32) -> u8 {
    ((v.clamp(-1.0, 1.0) * 0.5 + 0.5) * 255.0).round() as u8
}
