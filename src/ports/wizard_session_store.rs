//! Wizard Session Store Port - Keeps in-progress assessments between requests.

use async_trait::async_trait;

use crate::domain::assessment::WizardSession;
use crate::domain::foundation::AssessmentId;

/// Errors that can occur during session storage operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for saving and loading wizard sessions.
///
/// One session per id; `save` overwrites.
#[async_trait]
pub trait WizardSessionStore: Send + Sync {
    async fn save(&self, session: &WizardSession) -> Result<(), SessionStoreError>;

    /// # Errors
    ///
    /// Returns `SessionStoreError::NotFound` if no session exists
    async fn load(&self, id: AssessmentId) -> Result<WizardSession, SessionStoreError>;
}
