//! Dataset construction errors.

use thiserror::Error;

use super::Dimension;
use crate::domain::foundation::{DomainError, ErrorCode, RespondentId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Two rows of one respondent disagree on a single-select answer.
    #[error("Respondent {respondent_id} has conflicting values for '{dimension}'")]
    InconsistentRespondent {
        respondent_id: RespondentId,
        dimension: Dimension,
    },
}

impl DatasetError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DatasetError::InconsistentRespondent { .. } => ErrorCode::InconsistentRespondent,
        }
    }
}

impl From<DatasetError> for DomainError {
    fn from(err: DatasetError) -> Self {
        let detail = match &err {
            DatasetError::InconsistentRespondent { respondent_id, .. } => respondent_id.to_string(),
        };
        DomainError::new(err.code(), err.to_string()).with_detail("respondent_id", detail)
    }
}
