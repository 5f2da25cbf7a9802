//! Scoring rules and display helpers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Points per correct Higher/Lower answer before the streak multiplier.
pub const HIGHER_LOWER_BASE_POINTS: u32 = 10;

/// The streak multiplier stops growing here.
pub const MAX_STREAK_MULTIPLIER: u32 = 5;

/// A guess worth at least this many points keeps the streak alive.
pub const GUESS_STREAK_THRESHOLD: u32 = 50;

pub const MAX_GUESS_POINTS: u32 = 100;

// (max distance in tenths of a point, points), tightest band first.
const GUESS_BANDS: [(u16, u32); 5] = [(20, 100), (50, 75), (100, 50), (200, 25), (250, 10)];

/// Points for a correct Higher/Lower answer given the streak it extends to.
pub fn points_for_streak(streak: u32) -> u32 {
    HIGHER_LOWER_BASE_POINTS * streak.min(MAX_STREAK_MULTIPLIER)
}

/// Points for a guess by its distance from the answer.
///
/// | distance | points |
/// |----------|--------|
/// | ≤ 2      | 100    |
/// | ≤ 5      | 75     |
/// | ≤ 10     | 50     |
/// | ≤ 20     | 25     |
/// | ≤ 25     | 10     |
/// | > 25     | 0      |
pub fn points_for_guess(guess: Percentage, answer: Percentage) -> u32 {
    let diff = guess.tenths().abs_diff(answer.tenths());
    GUESS_BANDS
        .iter()
        .find(|(max_diff, _)| diff <= *max_diff)
        .map_or(0, |(_, points)| *points)
}

/// Streak decoration: ≥10 🔥🔥🔥, ≥7 🔥🔥, ≥5 🔥, ≥3 ⚡, else nothing.
pub fn streak_badge(streak: u32) -> &'static str {
    if streak >= 10 {
        "🔥🔥🔥"
    } else if streak >= 7 {
        "🔥🔥"
    } else if streak >= 5 {
        "🔥"
    } else if streak >= 3 {
        "⚡"
    } else {
        ""
    }
}

/// How the reveal reacts to a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessReaction {
    Bullseye,
    Nice,
    CloseIsh,
    WayOff,
}

impl GuessReaction {
    pub fn from_points(points: u32) -> Self {
        if points >= MAX_GUESS_POINTS {
            Self::Bullseye
        } else if points >= GUESS_STREAK_THRESHOLD {
            Self::Nice
        } else if points >= 10 {
            Self::CloseIsh
        } else {
            Self::WayOff
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bullseye => "🎯 BULLSEYE!",
            Self::Nice => "👏 Nice!",
            Self::CloseIsh => "🤔 Close-ish...",
            Self::WayOff => "😅 Way off!",
        }
    }

    /// True for reactions shown as a success.
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Bullseye | Self::Nice)
    }
}

/// Final verdict of a Guess run, by average points per question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Expert,
    Solid,
    Decent,
    NeedsReview,
}

impl Grade {
    pub fn from_average(average: f64) -> Self {
        if average >= 75.0 {
            Self::Expert
        } else if average >= 50.0 {
            Self::Solid
        } else if average >= 25.0 {
            Self::Decent
        } else {
            Self::NeedsReview
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Expert => "🥇 Expert: you know this industry cold.",
            Self::Solid => "🥈 Solid: good industry intuition.",
            Self::Decent => "🥉 Decent: some blind spots to work on.",
            Self::NeedsReview => "📚 Time to read the survey report!",
        }
    }
}
