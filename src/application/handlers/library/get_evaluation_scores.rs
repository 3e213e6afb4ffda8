//! GetEvaluationScoresHandler - Query handler for per-category radar charts.

use std::sync::Arc;

use super::or_empty;
use crate::domain::charts::ChartError;
use crate::domain::library::{evaluation_scores, EvaluationScores};
use crate::ports::RecordStore;

pub struct GetEvaluationScoresHandler {
    store: Arc<dyn RecordStore>,
}

impl GetEvaluationScoresHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<EvaluationScores, ChartError> {
        let evaluations = or_empty(self.store.list_evaluations().await, "evaluations");
        evaluation_scores(&evaluations)
    }
}
