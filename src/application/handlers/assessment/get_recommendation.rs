//! GetRecommendationHandler - Query handler for guidance on a completed assessment.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::{recommend, Recommendation};
use crate::domain::foundation::AssessmentId;
use crate::ports::WizardSessionStore;

#[derive(Debug, Clone)]
pub struct GetRecommendationQuery {
    pub assessment_id: AssessmentId,
}

pub struct GetRecommendationHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl GetRecommendationHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    /// Recomputed on every call.
    pub async fn handle(
        &self,
        query: GetRecommendationQuery,
    ) -> Result<Recommendation, AssessmentError> {
        let session = self.store.load(query.assessment_id).await?;
        let recommendation = recommend(session.answers())?;

        tracing::debug!(
            assessment_id = %query.assessment_id,
            tier = recommendation.risk_tier.label(),
            warnings = recommendation.prohibited_warnings.len(),
            "Recommendation derived"
        );
        Ok(recommendation)
    }
}
