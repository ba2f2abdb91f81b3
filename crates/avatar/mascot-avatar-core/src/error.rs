//! Error types for the avatar core.

use thiserror::Error;

/// Top-level error type for avatar core operations.
#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration value: {field} - {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for avatar core operations.
pub type Result<T> = std::result::Result<T, AvatarError>;
