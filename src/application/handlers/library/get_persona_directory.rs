//! GetPersonaDirectoryHandler - Query handler for persona cards.

use std::sync::Arc;

use super::or_empty;
use crate::domain::library::{persona_directory, PersonaDirectory};
use crate::ports::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct GetPersonaDirectoryQuery {
    pub origin: Option<String>,
}

pub struct GetPersonaDirectoryHandler {
    store: Arc<dyn RecordStore>,
}

impl GetPersonaDirectoryHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetPersonaDirectoryQuery) -> PersonaDirectory {
        let personas = or_empty(self.store.list_personas().await, "personas");
        let questions = or_empty(self.store.list_questions().await, "questions");
        let responses = or_empty(self.store.list_responses().await, "responses");

        persona_directory(&personas, &questions, &responses, query.origin.as_deref())
    }
}
