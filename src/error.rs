use thiserror::Error;

/// Errors reported by the grading and sampling routines.
///
/// The color transforms themselves never fail; invalid numeric input is
/// absorbed by clamping. Only count/length preconditions and the file
/// surface produce errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradingError {
    /// A count or slice length precondition was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GradingError>;
