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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Dataset path must not be empty")]
    EmptyDatasetPath,

    #[error("Explorer default_top_n must be at least 1")]
    InvalidTopN,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
