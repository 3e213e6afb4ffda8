//! YAML Record Store Adapter
//!
//! Each collection lives in its own file under the data directory, as a
//! mapping with a single top-level key holding a sequence:
//!
//! ```yaml
//! questions:
//!   - id: q1
//!     question_text: ...
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::library::{Evaluation, Insight, LlmResponse, Persona, Question};
use crate::ports::{RecordStore, RecordStoreError};

const QUESTIONS_KEY: &str = "questions";
const PERSONAS_KEY: &str = "personas";
const RESPONSES_KEY: &str = "responses";
const EVALUATIONS_KEY: &str = "evaluations";
const INSIGHTS_KEY: &str = "insights";

/// File names of the five collections, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFiles {
    pub questions: String,
    pub personas: String,
    pub responses: String,
    pub evaluations: String,
    pub insights: String,
}

impl Default for RecordFiles {
    fn default() -> Self {
        Self {
            questions: "questions.yaml".to_string(),
            personas: "personas.yaml".to_string(),
            responses: "llm_responses.yaml".to_string(),
            evaluations: "evaluation_scores.yaml".to_string(),
            insights: "contributor_insights.yaml".to_string(),
        }
    }
}

/// Record store backed by YAML files on disk
#[derive(Debug, Clone)]
pub struct YamlRecordStore {
    data_dir: PathBuf,
    files: RecordFiles,
}

impl YamlRecordStore {
    /// Create a store reading the default file names from `data_dir`
    ///
    /// # Example
    /// ```ignore
    /// let store = YamlRecordStore::new("./domain_data");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self::with_files(data_dir, RecordFiles::default())
    }

    pub fn with_files<P: AsRef<Path>>(data_dir: P, files: RecordFiles) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            files,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn load<T: DeserializeOwned>(
        &self,
        file: &str,
        key: &'static str,
    ) -> Result<Vec<T>, RecordStoreError> {
        let path = self.data_dir.join(file);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(file = %path.display(), "Record file missing, using empty list");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(RecordStoreError::Io {
                    file: file.to_string(),
                    message: e.to_string(),
                })
            }
        };

        let parse_error = |message: String| RecordStoreError::Parse {
            file: file.to_string(),
            message,
        };

        let document: Value =
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?;
        let records = match document {
            Value::Mapping(mut map) => map.remove(key),
            Value::Null => None,
            _ => return Err(parse_error("expected a mapping at the top level".to_string())),
        };

        match records {
            None | Some(Value::Null) => {
                tracing::warn!(file, key, "Record key missing, using empty list");
                Ok(Vec::new())
            }
            Some(value) => {
                let items: Vec<T> =
                    serde_yaml::from_value(value).map_err(|e| parse_error(e.to_string()))?;
                tracing::debug!(file, count = items.len(), "Loaded records");
                Ok(items)
            }
        }
    }
}

#[async_trait]
impl RecordStore for YamlRecordStore {
    async fn list_questions(&self) -> Result<Vec<Question>, RecordStoreError> {
        self.load(&self.files.questions, QUESTIONS_KEY).await
    }

    async fn list_personas(&self) -> Result<Vec<Persona>, RecordStoreError> {
        self.load(&self.files.personas, PERSONAS_KEY).await
    }

    async fn list_responses(&self) -> Result<Vec<LlmResponse>, RecordStoreError> {
        self.load(&self.files.responses, RESPONSES_KEY).await
    }

    async fn list_evaluations(&self) -> Result<Vec<Evaluation>, RecordStoreError> {
        self.load(&self.files.evaluations, EVALUATIONS_KEY).await
    }

    async fn list_insights(&self) -> Result<Vec<Insight>, RecordStoreError> {
        self.load(&self.files.insights, INSIGHTS_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn write(dir: &TempDir, file: &str, contents: &str) {
        fs::write(dir.path().join(file), contents).await.unwrap();
    }

    #[tokio::test]
    async fn test_reads_questions_in_file_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "questions.yaml",
            "questions:\n  - id: q2\n    question_text: Second?\n    category: Safety\n    subcategory: Harm\n  - id: q1\n    question_text: First?\n    category: Fairness\n    subcategory: Gender\n",
        )
        .await;

        let store = YamlRecordStore::new(dir.path());
        let questions = store.list_questions().await.unwrap();

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "q2");
        assert_eq!(questions[1].category, "Fairness");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = YamlRecordStore::new(dir.path());

        assert!(store.list_personas().await.unwrap().is_empty());
        assert!(store.list_insights().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_is_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "llm_responses.yaml", "other: []\n").await;

        let store = YamlRecordStore::new(dir.path());
        assert!(store.list_responses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_file_is_empty() {
        let dir = TempDir::new().unwrap();
        write(&dir, "contributor_insights.yaml", "").await;

        let store = YamlRecordStore::new(dir.path());
        assert!(store.list_insights().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "evaluation_scores.yaml", "evaluations: [unclosed\n").await;

        let store = YamlRecordStore::new(dir.path());
        let result = store.list_evaluations().await;

        assert!(matches!(result, Err(RecordStoreError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "questions.yaml", "questions:\n  - id: q1\n").await;

        let store = YamlRecordStore::new(dir.path());
        assert!(matches!(
            store.list_questions().await,
            Err(RecordStoreError::Parse { .. })
        ));
    }

    #[tokio::test]
    async fn test_custom_file_names() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "reviews.yml",
            "insights:\n  - question_id: q1\n    reviewer: Sam\n    comment_text: Clear.\n",
        )
        .await;

        let files = RecordFiles {
            insights: "reviews.yml".to_string(),
            ..RecordFiles::default()
        };
        let store = YamlRecordStore::with_files(dir.path(), files);

        let insights = store.list_insights().await.unwrap();
        assert_eq!(insights[0].reviewer, "Sam");
    }

    #[tokio::test]
    async fn test_reads_nested_evaluation_scores() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "evaluation_scores.yaml",
            "evaluations:\n  - question_id: q1\n    scores:\n      safety:\n        harm: 0.2\n      fairness:\n        gender: 0.7\n    feedback: ok\n",
        )
        .await;

        let store = YamlRecordStore::new(dir.path());
        let evaluations = store.list_evaluations().await.unwrap();

        let categories: Vec<_> = evaluations[0].scores.iter().map(|(k, _)| k).collect();
        assert_eq!(categories, vec!["safety", "fairness"]);
        assert_eq!(evaluations[0].feedback.as_deref(), Some("ok"));
    }
}
