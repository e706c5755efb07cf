//! # randstr Error
use thiserror::Error;

/// randstr Error
#[derive(Error, Debug)]
pub enum RandStrError {
    /// Invalid length requested (negative or not a number)
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// The secure randomness source failed or is unavailable
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Parsing Configuration Error
    #[error("Failed to parse the configuration file: {0}")]
    ConfigParseError(String),
    /// IO Error
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    /// Yaml Error
    #[error("Yaml Error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    /// Figment Error
    #[error("Figment Error: {0}")]
    FigmentError(#[from] figment::Error),
}
