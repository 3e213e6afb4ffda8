//! Errors surfaced by assessment handlers.

use thiserror::Error;

use crate::domain::assessment::WizardError;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::SessionStoreError;

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("Session storage failed: {0}")]
    Storage(String),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Wizard(err) => err.code(),
            AssessmentError::Storage(_) => ErrorCode::StorageError,
        }
    }
}

impl From<SessionStoreError> for AssessmentError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => AssessmentError::NotFound(id),
            SessionStoreError::Storage(message) => AssessmentError::Storage(message),
        }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match err {
            AssessmentError::Wizard(wizard) => wizard.into(),
            AssessmentError::NotFound(id) => {
                DomainError::new(ErrorCode::AssessmentNotFound, format!("Assessment not found: {}", id))
                    .with_detail("assessment_id", id.to_string())
            }
            AssessmentError::Storage(message) => DomainError::new(ErrorCode::StorageError, message),
        }
    }
}
