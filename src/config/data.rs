//! Reference data configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the YAML record collections live
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the collection files
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_questions_file")]
    pub questions_file: String,

    #[serde(default = "default_personas_file")]
    pub personas_file: String,

    #[serde(default = "default_responses_file")]
    pub responses_file: String,

    #[serde(default = "default_evaluations_file")]
    pub evaluations_file: String,

    #[serde(default = "default_insights_file")]
    pub insights_file: String,
}

impl DataConfig {
    fn files(&self) -> [&str; 5] {
        [
            self.questions_file.as_str(),
            self.personas_file.as_str(),
            self.responses_file.as_str(),
            self.evaluations_file.as_str(),
            self.insights_file.as_str(),
        ]
    }

    /// Validate data configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("data.dir"));
        }
        for file in self.files() {
            if !(file.ends_with(".yaml") || file.ends_with(".yml")) {
                return Err(ValidationError::InvalidRecordFile(file.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            questions_file: default_questions_file(),
            personas_file: default_personas_file(),
            responses_file: default_responses_file(),
            evaluations_file: default_evaluations_file(),
            insights_file: default_insights_file(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("domain_data")
}

fn default_questions_file() -> String {
    "questions.yaml".to_string()
}

fn default_personas_file() -> String {
    "personas.yaml".to_string()
}

fn default_responses_file() -> String {
    "llm_responses.yaml".to_string()
}

fn default_evaluations_file() -> String {
    "evaluation_scores.yaml".to_string()
}

fn default_insights_file() -> String {
    "contributor_insights.yaml".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DataConfig::default();
        assert_eq!(config.dir, PathBuf::from("domain_data"));
        assert_eq!(config.responses_file, "llm_responses.yaml");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_dir_is_rejected() {
        let config = DataConfig {
            dir: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("data.dir"))
        );
    }

    #[test]
    fn test_non_yaml_file_is_rejected() {
        let config = DataConfig {
            personas_file: "personas.json".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidRecordFile("personas.json".to_string()))
        );
    }

    #[test]
    fn test_yml_extension_is_accepted() {
        let config = DataConfig {
            insights_file: "insights.yml".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
