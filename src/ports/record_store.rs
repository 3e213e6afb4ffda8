//! Record Store Port - Read-only access to the reference library.
//!
//! The library is authored offline (questions, personas, model outputs,
//! evaluation scores, contributor insights) and only ever read here.

use async_trait::async_trait;

use crate::domain::library::{Evaluation, Insight, LlmResponse, Persona, Question};

/// Errors that can occur while reading records
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to read {file}: {message}")]
    Io { file: String, message: String },

    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },
}

/// Port for listing reference records.
///
/// A collection that does not exist yields an empty list, not an error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_questions(&self) -> Result<Vec<Question>, RecordStoreError>;

    async fn list_personas(&self) -> Result<Vec<Persona>, RecordStoreError>;

    async fn list_responses(&self) -> Result<Vec<LlmResponse>, RecordStoreError>;

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, RecordStoreError>;

    async fn list_insights(&self) -> Result<Vec<Insight>, RecordStoreError>;
}
