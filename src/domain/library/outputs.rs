//! Model outputs joined with their questions and risk badges.

use serde::Serialize;

use super::records::{question_text, LlmResponse, Question};
use super::RiskColor;

pub const NO_OUTPUTS_NOTICE: &str = "No LLM Outputs found.";
pub const QUESTION_TEXT_NOT_FOUND: &str = "Question text not found";
pub const NO_SUGGESTED_FIX: &str = "No suggested fix available for this response.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBadge {
    /// `risk_score * 100`, rounded to one decimal.
    pub percent: f64,
    pub label: String,
    pub color: RiskColor,
}

impl RiskBadge {
    pub fn from_score(score: f64) -> Self {
        let percent = score * 100.0;
        Self {
            percent: (percent * 10.0).round() / 10.0,
            label: format!("{:.1}%", percent),
            color: RiskColor::for_percent(percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputEntry {
    pub question_id: String,
    pub question_text: String,
    pub response_text: String,
    pub risk_flags: Vec<String>,
    pub badge: RiskBadge,
    /// The suggested fix, or a fixed placeholder text.
    pub suggested_fix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LlmOutputs {
    pub entries: Vec<OutputEntry>,
    pub notice: Option<&'static str>,
}

pub fn llm_outputs(responses: &[LlmResponse], questions: &[Question]) -> LlmOutputs {
    let entries: Vec<OutputEntry> = responses
        .iter()
        .map(|r| OutputEntry {
            question_id: r.question_id.clone(),
            question_text: question_text(questions, &r.question_id)
                .unwrap_or(QUESTION_TEXT_NOT_FOUND)
                .to_string(),
            response_text: r.response_text.clone(),
            risk_flags: r.risk_flags.clone(),
            badge: RiskBadge::from_score(r.risk_score),
            suggested_fix: r
                .suggested_fix
                .clone()
                .unwrap_or_else(|| NO_SUGGESTED_FIX.to_string()),
        })
        .collect();

    LlmOutputs {
        notice: entries.is_empty().then_some(NO_OUTPUTS_NOTICE),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str, score: f64, fix: Option<&str>) -> LlmResponse {
        LlmResponse {
            question_id: id.into(),
            response_text: "text".into(),
            risk_flags: vec!["stereotyping".into()],
            risk_score: score,
            suggested_fix: fix.map(String::from),
        }
    }

    #[test]
    fn badge_uses_percent_thresholds() {
        assert_eq!(RiskBadge::from_score(0.12).color, RiskColor::Green);
        assert_eq!(RiskBadge::from_score(0.3).color, RiskColor::Orange);
        let red = RiskBadge::from_score(0.756);
        assert_eq!(red.color, RiskColor::Red);
        assert_eq!(red.label, "75.6%");
        assert_eq!(red.percent, 75.6);
    }

    #[test]
    fn missing_question_and_fix_use_placeholders() {
        let outputs = llm_outputs(&[response("q404", 0.1, None)], &[]);
        let entry = &outputs.entries[0];
        assert_eq!(entry.question_text, QUESTION_TEXT_NOT_FOUND);
        assert_eq!(entry.suggested_fix, NO_SUGGESTED_FIX);
        assert_eq!(outputs.notice, None);
    }

    #[test]
    fn suggested_fix_is_passed_through() {
        let outputs = llm_outputs(&[response("q1", 0.5, Some("Rephrase neutrally"))], &[]);
        assert_eq!(outputs.entries[0].suggested_fix, "Rephrase neutrally");
    }

    #[test]
    fn no_responses_gives_notice() {
        assert_eq!(llm_outputs(&[], &[]).notice, Some(NO_OUTPUTS_NOTICE));
    }
}
