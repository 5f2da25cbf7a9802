//! Logging initialization.

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur during logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` when set.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_span_events(FmtSpan::NONE)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_span_events(FmtSpan::NONE)
                    .with_writer(io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LoggingError::InvalidFilter(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_is_reported() {
        let config = LoggingConfig {
            level: "survey_game=notalevel".to_string(),
            format: LogFormat::Text,
        };
        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(build_filter(&config), Err(LoggingError::InvalidFilter(_))));
        }
    }

    #[test]
    fn default_level_builds_a_filter() {
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }
}
