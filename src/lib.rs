//! HDR color grading and SSAO sampling math for real-time renderers.
//!
//! Everything here is engine-agnostic: colors are plain
//! [`nalgebra::Vector3<f32>`] values and the SSAO tables are plain vectors,
//! ready to be uploaded by whatever graphics API the caller uses.

pub mod core;
pub mod error;
pub mod grading;
pub mod io;
pub mod ssao;

pub use crate::core::color::Color;
pub use crate::core::gamma::{gamma_to_linear, linear_to_gamma};
pub use crate::core::tonemap::aces_film;
pub use crate::error::{GradingError, Result};
pub use crate::grading::adjust::{
    adjust_brightness, adjust_contrast, adjust_exposure, adjust_saturation,
};
pub use crate::grading::pipeline::GradingSettings;
pub use crate::grading::white_balance::adjust_color_temperature;
pub use crate::ssao::kernel::generate_ssao_kernel;
pub use crate::ssao::noise::generate_ssao_noise;
pub use crate::ssao::occlusion::calculate_ssao_occlusion;
pub use crate::ssao::settings::{SsaoSettings, SsaoTables};
