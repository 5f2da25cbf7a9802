//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SURVEY_GAME` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use survey_game::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading survey from {}", config.dataset.path.display());
//! ```

mod dataset;
mod error;
mod explorer;
mod game;
mod logging;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use explorer::ExplorerConfig;
pub use game::GameConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Survey CSV location
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Game session settings (shuffle seed)
    #[serde(default)]
    pub game: GameConfig,

    /// Explorer defaults
    #[serde(default)]
    pub explorer: ExplorerConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SURVEY_GAME` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SURVEY_GAME__DATASET__PATH=data/expanded.csv` -> `dataset.path`
    /// - `SURVEY_GAME__GAME__SHUFFLE_SEED=42` -> `game.shuffle_seed`
    /// - `SURVEY_GAME__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SURVEY_GAME")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty dataset path, a zero
    /// `default_top_n` or an empty log level.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dataset.validate()?;
        self.explorer.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SURVEY_GAME__DATASET__PATH");
        env::remove_var("SURVEY_GAME__GAME__SHUFFLE_SEED");
        env::remove_var("SURVEY_GAME__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("data/expanded.csv"));
        assert_eq!(config.game.shuffle_seed, 42);
        assert_eq!(config.explorer.default_top_n, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SURVEY_GAME__DATASET__PATH", "/srv/survey.csv");
        env::set_var("SURVEY_GAME__GAME__SHUFFLE_SEED", "7");
        env::set_var("SURVEY_GAME__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("/srv/survey.csv"));
        assert_eq!(config.game.shuffle_seed, 7);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut config = AppConfig::default();
        config.explorer.default_top_n = Some(0);
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTopN)));
    }
}
