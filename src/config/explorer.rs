//! Explorer configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Explorer defaults
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerConfig {
    /// Truncate distributions to this many groups unless a query says otherwise
    pub default_top_n: Option<usize>,
}

impl ExplorerConfig {
    /// Validate explorer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_top_n == Some(0) {
            return Err(ValidationError::InvalidTopN);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_top_n_rejected() {
        let config = ExplorerConfig {
            default_top_n: Some(0),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTopN));
        assert!(ExplorerConfig::default().validate().is_ok());
    }
}
