//! NavigateHandler - Command handler for moving between wizard steps.
//!
//! Load, mutate and save run without a per-session lock; one client drives
//! one session at a time.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::WizardSession;
use crate::domain::foundation::AssessmentId;
use crate::ports::WizardSessionStore;

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Advance,
    Retreat,
    Reset,
}

/// Command to move a wizard forward, back, or to a fresh start.
#[derive(Debug, Clone)]
pub struct NavigateCommand {
    pub assessment_id: AssessmentId,
    pub direction: Direction,
}

/// Handler for step navigation.
pub struct NavigateHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl NavigateHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: NavigateCommand) -> Result<WizardSession, AssessmentError> {
        let mut session = self.store.load(cmd.assessment_id).await?;
        let from = session.state();

        match cmd.direction {
            Direction::Advance => {
                session.advance()?;
            }
            Direction::Retreat => {
                session.retreat()?;
            }
            Direction::Reset => session.reset(),
        }

        self.store.save(&session).await?;

        tracing::debug!(
            assessment_id = %cmd.assessment_id,
            from = %from,
            to = %session.state(),
            progress = %session.progress(),
            "Wizard moved"
        );
        if session.is_complete() && !from.is_completed() {
            tracing::info!(assessment_id = %cmd.assessment_id, "Assessment completed");
        }

        Ok(session)
    }
}
