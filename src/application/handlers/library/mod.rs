//! Library query handlers.
//!
//! The library is reference material: a collection that cannot be read is
//! logged and shown as empty rather than failing the request.

mod get_contributor_insights;
mod get_evaluation_scores;
mod get_llm_outputs;
mod get_persona_directory;
mod get_question_library;

pub use get_contributor_insights::GetContributorInsightsHandler;
pub use get_evaluation_scores::GetEvaluationScoresHandler;
pub use get_llm_outputs::GetLlmOutputsHandler;
pub use get_persona_directory::{GetPersonaDirectoryHandler, GetPersonaDirectoryQuery};
pub use get_question_library::{GetQuestionLibraryHandler, GetQuestionLibraryQuery};

use crate::ports::RecordStoreError;

/// Unwraps a store result, degrading a failure to an empty list.
fn or_empty<T>(result: Result<Vec<T>, RecordStoreError>, collection: &'static str) -> Vec<T> {
    result.unwrap_or_else(|err| {
        tracing::error!(collection, error = %err, "Failed to load records");
        Vec::new()
    })
}
