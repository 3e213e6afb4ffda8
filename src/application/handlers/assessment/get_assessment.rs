//! GetAssessmentHandler - Query handler for the current wizard view.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::{
    recommend, summarize, AssessmentAnswers, AssessmentSummary, FieldId, Recommendation,
    WizardSession, WizardState, WizardStep,
};
use crate::domain::foundation::{AssessmentId, Percentage, Timestamp};
use crate::ports::WizardSessionStore;

/// Query for one assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Everything needed to render the wizard at its current position.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentView {
    pub id: AssessmentId,
    pub state: WizardState,
    pub step: WizardStep,
    pub progress: Percentage,
    pub can_advance: bool,
    pub visible_fields: BTreeSet<FieldId>,
    pub answers: AssessmentAnswers,
    /// Present once completed.
    pub summary: Option<AssessmentSummary>,
    /// Present once completed.
    pub recommendation: Option<Recommendation>,
    pub updated_at: Timestamp,
}

impl AssessmentView {
    pub fn from_session(session: &WizardSession) -> Self {
        let answers = session.snapshot();
        Self {
            id: *session.id(),
            state: session.state(),
            step: session.current_step(),
            progress: session.progress(),
            can_advance: session.can_advance(),
            visible_fields: session.visible_fields(),
            summary: summarize(&answers).ok(),
            recommendation: recommend(&answers).ok(),
            answers,
            updated_at: *session.updated_at(),
        }
    }
}

/// Handler for reading an assessment.
pub struct GetAssessmentHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl GetAssessmentHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<AssessmentView, AssessmentError> {
        let session = self.store.load(query.assessment_id).await?;
        Ok(AssessmentView::from_session(&session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryWizardSessionStore;
    use crate::domain::assessment::{AnswerUpdate, RiskTier, RoleKind};

    #[tokio::test]
    async fn test_in_progress_view_has_no_results() {
        let store = Arc::new(InMemoryWizardSessionStore::new());
        let session = WizardSession::new(AssessmentId::new());
        store.save(&session).await.unwrap();

        let view = GetAssessmentHandler::new(store)
            .handle(GetAssessmentQuery {
                assessment_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.step, WizardStep::Jurisdiction);
        assert_eq!(view.progress.value(), 25);
        assert!(!view.can_advance);
        assert_eq!(view.visible_fields.len(), 2);
        assert!(view.summary.is_none());
        assert!(view.recommendation.is_none());
    }

    #[tokio::test]
    async fn test_completed_view_carries_summary_and_recommendation() {
        let store = Arc::new(InMemoryWizardSessionStore::new());
        let mut session = WizardSession::new(AssessmentId::new());
        session.update_answer(AnswerUpdate::IsEu(false)).unwrap();
        session
            .update_answer(AnswerUpdate::Roles([RoleKind::Importer].into_iter().collect()))
            .unwrap();
        for _ in 0..3 {
            session.advance().unwrap();
        }
        store.save(&session).await.unwrap();

        let view = GetAssessmentHandler::new(store)
            .handle(GetAssessmentQuery {
                assessment_id: *session.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.progress, Percentage::HUNDRED);
        assert!(view.visible_fields.is_empty());
        assert_eq!(
            view.summary.as_ref().and_then(|s| s.value("EU Relevant")),
            Some("No")
        );
        assert_eq!(
            view.recommendation.map(|r| r.risk_tier),
            Some(RiskTier::NotApplicable)
        );
    }
}
