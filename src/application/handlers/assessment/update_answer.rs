//! UpdateAnswerHandler - Command handler for writing one answer field.
//!
//! Load, mutate and save run without a per-session lock; one client drives
//! one session at a time.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::{AnswerUpdate, WizardSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::WizardSessionStore;

/// Command to write a single answer field.
#[derive(Debug, Clone)]
pub struct UpdateAnswerCommand {
    pub assessment_id: AssessmentId,
    pub update: AnswerUpdate,
}

/// Handler for answer updates.
pub struct UpdateAnswerHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl UpdateAnswerHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    /// Applies the update and persists the session. A rejected update leaves
    /// the stored session untouched.
    pub async fn handle(&self, cmd: UpdateAnswerCommand) -> Result<WizardSession, AssessmentError> {
        let mut session = self.store.load(cmd.assessment_id).await?;
        let field = cmd.update.field();

        if let Err(err) = session.update_answer(cmd.update) {
            tracing::debug!(
                assessment_id = %cmd.assessment_id,
                field = field.column(),
                error = %err,
                "Answer rejected"
            );
            return Err(err.into());
        }

        self.store.save(&session).await?;
        Ok(session)
    }
}
