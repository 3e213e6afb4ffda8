//! State machine trait for lifecycle enums.
//!
//! Gives every lifecycle enum (wizard states today) the same validated
//! transition API.

use super::ValidationError;

/// Trait for enums that represent a finite state machine.
///
/// Implementors declare the transition table; validated transitions come
/// for free.
///
/// ```ignore
/// let next = WizardState::Step1.transition_to(WizardState::Step2)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if the table contains `self -> target`.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs a transition, returning an error if the table forbids it.
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
}
