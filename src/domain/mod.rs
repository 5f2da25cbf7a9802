//! Domain layer containing the survey model, analysis and game logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (percentages, IDs, errors, state machine)
//! - `survey` - Immutable response table, dimensions and taxonomy
//! - `analysis` - Pure distinct-respondent aggregation
//! - `questions` - Question bank derived from the survey
//! - `game` - Game session state machine and scoring

pub mod analysis;
pub mod foundation;
pub mod game;
pub mod questions;
pub mod survey;
