//! End-of-run summary for Guess mode.

use serde::{Deserialize, Serialize};

use super::scoring::{Grade, MAX_GUESS_POINTS};

/// Final score card of a Guess run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub max_score: u32,
    pub questions_answered: u32,
    pub total_questions: u32,
    /// Mean points per answered question.
    pub average: f64,
    pub grade: Grade,
    pub best_streak: u32,
    /// True once every question has been answered.
    pub complete: bool,
}

impl GameSummary {
    /// `None` until at least one question has been answered.
    pub fn compute(
        score: u32,
        questions_answered: u32,
        total_questions: u32,
        best_streak: u32,
    ) -> Option<Self> {
        if questions_answered == 0 {
            return None;
        }
        let average = f64::from(score) / f64::from(questions_answered);
        Some(Self {
            score,
            max_score: total_questions * MAX_GUESS_POINTS,
            questions_answered,
            total_questions,
            average,
            grade: Grade::from_average(average),
            best_streak,
            complete: questions_answered >= total_questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_summary_before_first_answer() {
        assert!(GameSummary::compute(0, 0, 10, 0).is_none());
    }

    #[test]
    fn grades_by_average_points() {
        let summary = GameSummary::compute(600, 10, 10, 4).unwrap();
        assert_eq!(summary.max_score, 1000);
        assert_eq!(summary.average, 60.0);
        assert_eq!(summary.grade, Grade::Solid);
        assert!(summary.complete);
    }

    #[test]
    fn partial_run_is_not_complete() {
        let summary = GameSummary::compute(100, 1, 10, 1).unwrap();
        assert_eq!(summary.grade, Grade::Expert);
        assert!(!summary.complete);
    }
}
