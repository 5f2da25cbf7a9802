//! Game session errors.

use thiserror::Error;

use super::{GameMode, GamePhase};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Rejections of a game operation. The session is unchanged after any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("Cannot {operation} while in {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: GamePhase,
    },

    #[error("Guess must be between 0 and 100, got {guess}")]
    InvalidGuess { guess: f64 },

    #[error("No game mode selected")]
    NoModeSelected,

    #[error("No questions available for {mode}")]
    EmptyQuestionBank { mode: GameMode },

    #[error("Cannot {operation} in {mode}")]
    WrongMode {
        operation: &'static str,
        mode: GameMode,
    },
}

impl GameError {
    pub fn invalid_transition(operation: &'static str, phase: GamePhase) -> Self {
        GameError::InvalidTransition { operation, phase }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
            GameError::InvalidGuess { .. } => ErrorCode::InvalidGuess,
            GameError::NoModeSelected => ErrorCode::NoModeSelected,
            GameError::EmptyQuestionBank { .. } => ErrorCode::EmptyQuestionBank,
            GameError::WrongMode { .. } => ErrorCode::WrongGameMode,
        }
    }

    /// True when the player can simply try again (re-prompt).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidGuess { .. })
    }
}

impl From<GameError> for DomainError {
    fn from(err: GameError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match &err {
            GameError::InvalidTransition { operation, phase } => domain
                .with_detail("operation", *operation)
                .with_detail("phase", phase.to_string()),
            GameError::InvalidGuess { guess } => domain.with_detail("guess", guess.to_string()),
            GameError::EmptyQuestionBank { mode } | GameError::WrongMode { mode, .. } => {
                domain.with_detail("mode", mode.to_string())
            }
            GameError::NoModeSelected => domain,
        }
    }
}
