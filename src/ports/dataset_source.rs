//! DatasetSource port for loading the survey table

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::survey::{DatasetError, ResponseRow};

/// Errors that can occur while loading survey rows
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying file or stream could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed at all
    #[error("Malformed record at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    /// A field held a value outside its closed answer set
    #[error("Invalid {field} at line {line}: {value:?}")]
    InvalidValue {
        line: u64,
        field: &'static str,
        value: String,
    },

    /// The rows loaded but do not form a consistent dataset
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

impl From<SourceError> for DomainError {
    fn from(err: SourceError) -> Self {
        match &err {
            SourceError::Dataset(inner) => inner.clone().into(),
            SourceError::Parse { line, .. } | SourceError::InvalidValue { line, .. } => {
                DomainError::new(ErrorCode::DatasetUnavailable, err.to_string())
                    .with_detail("line", line.to_string())
            }
            SourceError::Io(_) => DomainError::new(ErrorCode::DatasetUnavailable, err.to_string()),
        }
    }
}

/// Supplies the exploded survey rows, once, at startup
pub trait DatasetSource: Send + Sync {
    /// Read every row
    fn load(&self) -> Result<Vec<ResponseRow>, SourceError>;

    /// Human-readable origin for logs
    fn describe(&self) -> String;
}
