//! Questions module - Trivia questions derived from the survey.
//!
//! # Components
//!
//! - `ComparisonQuestion` - Higher/Lower pairs drawn from one chart family
//! - `EstimationQuestion` - Curated guess-the-percentage facts
//! - `ChartData` - Reveal chart carried by every question
//! - `QuestionBank` - Deterministic builder and read-only store

mod bank;
mod chart;
mod comparison;
mod estimation;

pub use bank::QuestionBank;
pub use chart::{ChartData, ChartPoint};
pub use comparison::{ComparisonFamily, ComparisonQuestion};
pub use estimation::EstimationQuestion;
