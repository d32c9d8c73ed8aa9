use crate::error::{GradingError, Result};
use crate::grading::pipeline::GradingSettings;
use crate::ssao::settings::SsaoSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grading: GradingSettings,
    #[serde(default)]
    pub ssao: SsaoSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// PNG path for the 4x4 noise tile.
    #[serde(default)]
    pub noise_image: Option<String>,
    /// Text file for the kernel constants.
    #[serde(default)]
    pub kernel_table: Option<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GradingError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| GradingError::Config(format!("Failed to parse TOML: {}", e)))
    }
}
