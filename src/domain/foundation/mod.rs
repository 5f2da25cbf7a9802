//! Foundation module - Shared domain primitives.
//!
//! Value objects, identifiers, the error vocabulary and the state machine
//! trait used by the survey, analysis, question and game modules.

mod errors;
mod ids;
mod percentage;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{GameSessionId, RespondentId};
pub use percentage::Percentage;
pub use state_machine::StateMachine;
