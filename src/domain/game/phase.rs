//! Game modes and session phases.
//!
//! A session starts in `Menu`, enters a mode, then alternates between
//! `AwaitingAnswer` and `Revealed` until the player leaves. Guess mode also
//! reaches `Summary` once every fact has been answered.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Which game the player is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Endless stream of comparison questions scored by streak.
    HigherLower,
    /// Finite run through the estimation facts scored by accuracy.
    Guess,
}

impl GameMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::HigherLower => "Higher or Lower",
            Self::Guess => "Guess the Number",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a session is in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// No mode selected.
    #[default]
    Menu,
    /// A question is shown and has not been answered.
    AwaitingAnswer,
    /// The answer and reveal chart are shown.
    Revealed,
    /// Guess mode finished; final score and grade are shown.
    Summary,
}

impl GamePhase {
    pub fn accepts_answer(&self) -> bool {
        matches!(self, Self::AwaitingAnswer)
    }

    pub fn is_playing(&self) -> bool {
        !matches!(self, Self::Menu)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::AwaitingAnswer => "awaiting_answer",
            Self::Revealed => "revealed",
            Self::Summary => "summary",
        };
        f.write_str(name)
    }
}

impl StateMachine for GamePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GamePhase::*;
        matches!(
            (self, target),
            // Mode selected
            (Menu, AwaitingAnswer) |
            // Answer submitted
            (AwaitingAnswer, Revealed) |
            // Next question
            (Revealed, AwaitingAnswer) |
            // Last guess answered
            (Revealed, Summary) |
            // Reset keeps the mode
            (AwaitingAnswer, AwaitingAnswer) |
            (Summary, AwaitingAnswer) |
            // Exit
            (AwaitingAnswer, Menu) |
            (Revealed, Menu) |
            (Summary, Menu)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GamePhase::*;
        match self {
            Menu => vec![AwaitingAnswer],
            AwaitingAnswer => vec![Revealed, AwaitingAnswer, Menu],
            Revealed => vec![AwaitingAnswer, Summary, Menu],
            Summary => vec![AwaitingAnswer, Menu],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_menu() {
        assert_eq!(GamePhase::default(), GamePhase::Menu);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(serde_json::to_string(&GamePhase::AwaitingAnswer).unwrap(), "\"awaiting_answer\"");
        assert_eq!(serde_json::to_string(&GameMode::HigherLower).unwrap(), "\"higher_lower\"");
    }

    #[test]
    fn answer_loop_transitions_are_valid() {
        assert!(GamePhase::Menu.can_transition_to(&GamePhase::AwaitingAnswer));
        assert!(GamePhase::AwaitingAnswer.can_transition_to(&GamePhase::Revealed));
        assert!(GamePhase::Revealed.can_transition_to(&GamePhase::AwaitingAnswer));
        assert!(GamePhase::Revealed.can_transition_to(&GamePhase::Summary));
    }

    #[test]
    fn cannot_skip_the_reveal() {
        assert!(!GamePhase::AwaitingAnswer.can_transition_to(&GamePhase::Summary));
        assert!(GamePhase::AwaitingAnswer
            .transition_to(GamePhase::Summary)
            .is_err());
        assert!(!GamePhase::Menu.can_transition_to(&GamePhase::Revealed));
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        let all = [
            GamePhase::Menu,
            GamePhase::AwaitingAnswer,
            GamePhase::Revealed,
            GamePhase::Summary,
        ];
        for from in all {
            for to in all {
                assert_eq!(
                    from.can_transition_to(&to),
                    from.valid_transitions().contains(&to),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn no_phase_is_terminal() {
        assert!(!GamePhase::Summary.is_terminal());
        assert!(!GamePhase::Menu.is_terminal());
    }
}
