//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Profile API base URL must start with http:// or https://")]
    InvalidProfileApiUrl,

    #[error("Profile API base URL must use HTTPS in production")]
    ProfileApiMustBeHttps,

    #[error("Storage data directory must not be empty")]
    EmptyDataDir,

    #[error("Sync debounce must be between 1 and 60000 milliseconds")]
    InvalidDebounce,
}
