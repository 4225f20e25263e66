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
    #[error("Trigger keyword cannot be empty")]
    EmptyTriggerKeyword,

    #[error("Cancel keyword cannot be empty")]
    EmptyCancelKeyword,

    #[error("Trigger and cancel keywords must differ")]
    KeywordsCollide,

    #[error("Backend base URL must start with http:// or https://")]
    InvalidBackendUrl,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Result cap must be between 1 and 30")]
    InvalidMaxResults,
}
