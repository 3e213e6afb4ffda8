//! GetLlmOutputsHandler - Query handler for model outputs with risk badges.

use std::sync::Arc;

use super::or_empty;
use crate::domain::library::{llm_outputs, LlmOutputs};
use crate::ports::RecordStore;

pub struct GetLlmOutputsHandler {
    store: Arc<dyn RecordStore>,
}

impl GetLlmOutputsHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> LlmOutputs {
        let responses = or_empty(self.store.list_responses().await, "responses");
        let questions = or_empty(self.store.list_questions().await, "questions");
        llm_outputs(&responses, &questions)
    }
}
