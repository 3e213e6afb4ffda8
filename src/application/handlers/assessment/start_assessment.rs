//! StartAssessmentHandler - Command handler for opening a new assessment.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::WizardSession;
use crate::domain::foundation::AssessmentId;
use crate::ports::WizardSessionStore;

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<WizardSession, AssessmentError> {
        let session = WizardSession::new(AssessmentId::new());
        self.store.save(&session).await?;

        tracing::info!(assessment_id = %session.id(), "Assessment started");
        Ok(session)
    }
}
