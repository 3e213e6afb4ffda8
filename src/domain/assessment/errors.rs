//! Assessment wizard error types.

use thiserror::Error;

use super::answers::FieldId;
use super::step::WizardState;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Failures of wizard operations. None of them are fatal; the session is
/// left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The field is not part of the current step's schema.
    #[error("Field '{}' is not accepted in {state}", .field.column())]
    InvalidFieldForStep { field: FieldId, state: WizardState },

    /// Required data for the transition is missing.
    #[error("Cannot leave {state}: {reason}")]
    GuardNotSatisfied {
        state: WizardState,
        reason: &'static str,
    },

    /// A result that needs a completed assessment was requested early.
    #[error("Assessment is not completed")]
    NotCompleted,

    /// The move does not exist from the current state.
    #[error("Invalid transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::InvalidFieldForStep { .. } => ErrorCode::InvalidFieldForStep,
            WizardError::GuardNotSatisfied { .. } => ErrorCode::GuardNotSatisfied,
            WizardError::NotCompleted => ErrorCode::NotCompleted,
            WizardError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            WizardError::InvalidFieldForStep { field, state } => base
                .with_detail("field", field.column())
                .with_detail("state", state.to_string()),
            WizardError::GuardNotSatisfied { state, .. } => {
                base.with_detail("state", state.to_string())
            }
            _ => base,
        }
    }
}
