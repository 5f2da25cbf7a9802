//! Aggregation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Failures of explorer and aggregation calls.
///
/// An empty population is deliberately absent: it yields zero results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::UnknownDimension(_) => ErrorCode::UnknownDimension,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        match &err {
            AnalysisError::UnknownDimension(name) => {
                DomainError::new(err.code(), err.to_string()).with_detail("dimension", name.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_dimension_maps_to_domain_error() {
        let err: DomainError = AnalysisError::UnknownDimension("shoe_size".into()).into();
        assert_eq!(err.code, ErrorCode::UnknownDimension);
        assert_eq!(err.details.get("dimension"), Some(&"shoe_size".to_string()));
        assert_eq!(err.to_string(), "[UNKNOWN_DIMENSION] Unknown dimension: shoe_size");
    }
}
