//! Reference library: questions, personas, model outputs, evaluation
//! scores and contributor insights, plus the read-only views built on them.

mod evaluations;
mod insights;
mod outputs;
mod personas;
mod questions;
mod records;
mod risk_color;

pub use evaluations::{
    average_scores, evaluation_scores, CategoryAverages, EvaluationScores, NO_EVALUATIONS_NOTICE,
};
pub use insights::{contributor_insights, ContributorInsights, InsightEntry, NO_INSIGHTS_NOTICE};
pub use outputs::{
    llm_outputs, LlmOutputs, OutputEntry, RiskBadge, NO_OUTPUTS_NOTICE, NO_SUGGESTED_FIX,
    QUESTION_TEXT_NOT_FOUND,
};
pub use personas::{
    bias_label, persona_directory, short_education, short_experience, AssociatedQuestion,
    PersonaCard, PersonaDirectory, PersonaStats, ResponseExcerpt, NO_ASSOCIATED_QUESTIONS_NOTICE,
    NO_PERSONAS_NOTICE, QUESTION_NOT_FOUND,
};
pub use questions::{question_library, QuestionFilter, QuestionLibrary, NO_QUESTIONS_NOTICE};
pub use records::{question_text, Evaluation, Insight, LlmResponse, OrderedMap, Persona, Question};
pub use risk_color::RiskColor;

/// Filter option meaning "no filter".
pub const ALL_OPTION: &str = "All";
