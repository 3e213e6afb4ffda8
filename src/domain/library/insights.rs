use serde::Serialize;

use super::records::{question_text, Insight, Question};
use super::outputs::QUESTION_TEXT_NOT_FOUND;

pub const NO_INSIGHTS_NOTICE: &str = "No contributor insights found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightEntry {
    pub question_id: String,
    pub question_text: String,
    pub reviewer: String,
    pub comment_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributorInsights {
    pub entries: Vec<InsightEntry>,
    pub notice: Option<&'static str>,
}

/// Reviewer comments joined with the question they refer to.
pub fn contributor_insights(insights: &[Insight], questions: &[Question]) -> ContributorInsights {
    let entries: Vec<InsightEntry> = insights
        .iter()
        .map(|i| InsightEntry {
            question_id: i.question_id.clone(),
            question_text: question_text(questions, &i.question_id)
                .unwrap_or(QUESTION_TEXT_NOT_FOUND)
                .to_string(),
            reviewer: i.reviewer.clone(),
            comment_text: i.comment_text.clone(),
        })
        .collect();

    ContributorInsights {
        notice: entries.is_empty().then_some(NO_INSIGHTS_NOTICE),
        entries,
    }
}
