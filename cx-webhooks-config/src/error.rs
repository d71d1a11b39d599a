// Error types for configuration loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration value: {0}")]
    MissingKey(String),

    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
