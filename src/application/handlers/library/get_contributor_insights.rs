//! GetContributorInsightsHandler - Query handler for reviewer comments.

use std::sync::Arc;

use super::or_empty;
use crate::domain::library::{contributor_insights, ContributorInsights};
use crate::ports::RecordStore;

pub struct GetContributorInsightsHandler {
    store: Arc<dyn RecordStore>,
}

impl GetContributorInsightsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> ContributorInsights {
        let insights = or_empty(self.store.list_insights().await, "insights");
        let questions = or_empty(self.store.list_questions().await, "questions");
        contributor_insights(&insights, &questions)
    }
}
