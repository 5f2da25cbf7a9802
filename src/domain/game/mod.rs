//! Game module - Higher/Lower and Guess-the-Number sessions.
//!
//! # Components
//!
//! - `GameSession` - Caller-owned aggregate driven by the phase state machine
//! - `GamePhase` / `GameMode` - Menu, answer loop and summary
//! - `scoring` - Point rules, streak badges, reactions and grades
//! - `GameSummary` - Final score card of a Guess run

mod errors;
mod phase;
pub mod scoring;
mod session;
mod summary;

pub use errors::GameError;
pub use phase::{GameMode, GamePhase};
pub use scoring::{points_for_guess, streak_badge, Grade, GuessReaction};
pub use session::{
    AnswerOutcome, CurrentQuestion, GameSession, GameSnapshot, DEFAULT_SHUFFLE_SEED,
};
pub use summary::GameSummary;
