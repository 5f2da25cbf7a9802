//! Guess-the-number estimation questions.

use serde::{Deserialize, Serialize};

use super::ChartData;
use crate::domain::foundation::Percentage;

/// A curated fact the player estimates as a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationQuestion {
    pub prompt: String,
    pub answer: Percentage,
    pub hint: String,
    /// Takeaway shown after the answer.
    pub reveal: String,
    pub category: String,
    pub chart: ChartData,
}

impl EstimationQuestion {
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        answer: Percentage,
        chart: ChartData,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer,
            hint: String::new(),
            reveal: String::new(),
            category: category.into(),
            chart,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    pub fn with_reveal(mut self, reveal: impl Into<String>) -> Self {
        self.reveal = reveal.into();
        self
    }
}
