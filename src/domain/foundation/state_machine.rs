//! State machine trait for phase enums.

use super::ValidationError;

/// Trait for enums whose values form a state machine.
///
/// Implementors list their legal transitions; validated transitions and
/// terminal-state detection come for free.
///
/// ```ignore
/// let next = GamePhase::AwaitingAnswer.transition_to(GamePhase::Revealed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all legal targets from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, or reports why it is illegal.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// True when no outgoing transitions exist.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
