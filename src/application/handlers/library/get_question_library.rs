//! GetQuestionLibraryHandler - Query handler for the filtered question list.

use std::sync::Arc;

use super::or_empty;
use crate::domain::library::{question_library, QuestionFilter, QuestionLibrary};
use crate::ports::RecordStore;

#[derive(Debug, Clone, Default)]
pub struct GetQuestionLibraryQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

pub struct GetQuestionLibraryHandler {
    store: Arc<dyn RecordStore>,
}

impl GetQuestionLibraryHandler {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetQuestionLibraryQuery) -> QuestionLibrary {
        let questions = or_empty(self.store.list_questions().await, "questions");
        let filter = QuestionFilter {
            category: query.category,
            subcategory: query.subcategory,
        };
        question_library(questions, &filter)
    }
}
