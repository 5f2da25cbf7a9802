//! Dataset source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the exploded survey CSV lives
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the exploded CSV
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl DatasetConfig {
    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDatasetPath);
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/expanded.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_config_defaults() {
        let config = DatasetConfig::default();
        assert_eq!(config.path, PathBuf::from("data/expanded.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = DatasetConfig {
            path: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDatasetPath));
    }
}
