//! Request and response shapes for assessment endpoints.
//!
//! Answer updates are accepted as `AnswerUpdate` directly:
//! `{"field": "roles", "value": ["Provider"]}`.

use serde::Serialize;
use serde_json::Value;

use crate::application::AssessmentView;
use crate::domain::assessment::{
    AnswerUpdate, AssessmentAnswers, AssessmentSummary, FieldId, HighRiskCategory, ProhibitedTask,
    Recommendation, RoleKind, WizardSession, WizardState, TOTAL_STEPS,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Decodes an answer update body.
///
/// An unknown `field` is `InvalidFieldForStep`; a missing field name or a
/// value that does not fit the field is `ValidationFailed`.
pub fn parse_answer_update(body: Value) -> Result<AnswerUpdate, DomainError> {
    let field = body
        .get("field")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::ValidationFailed,
                "Answer update needs a string 'field'",
            )
        })?;

    if serde_json::from_value::<FieldId>(Value::String(field.clone())).is_err() {
        return Err(DomainError::new(
            ErrorCode::InvalidFieldForStep,
            format!("Unknown answer field '{}'", field),
        )
        .with_detail("field", field));
    }

    serde_json::from_value(body).map_err(|e| {
        DomainError::new(
            ErrorCode::ValidationFailed,
            format!("Invalid value for field '{}'", field),
        )
        .with_detail("field", field)
        .with_detail("reason", e.to_string())
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub number: u8,
    pub total: u8,
    pub title: &'static str,
    /// "Step n of 3"
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: AssessmentId,
    pub state: WizardState,
    pub step: StepResponse,
    pub progress: u8,
    pub can_advance: bool,
    pub visible_fields: Vec<FieldId>,
    pub answers: AssessmentAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<AssessmentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<Recommendation>,
    pub updated_at: String,
}

impl From<AssessmentView> for AssessmentResponse {
    fn from(view: AssessmentView) -> Self {
        Self {
            id: view.id,
            state: view.state,
            step: StepResponse {
                number: view.step.number(),
                total: TOTAL_STEPS,
                title: view.step.title(),
                label: view.step.to_string(),
            },
            progress: view.progress.value(),
            can_advance: view.can_advance,
            visible_fields: view.visible_fields.into_iter().collect(),
            answers: view.answers,
            summary: view.summary,
            recommendation: view.recommendation,
            updated_at: view.updated_at.to_display_string(),
        }
    }
}

impl From<&WizardSession> for AssessmentResponse {
    fn from(session: &WizardSession) -> Self {
        AssessmentView::from_session(session).into()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionResponse {
    pub value: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

/// Question text for one answer field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldPromptResponse {
    pub field: FieldId,
    pub step: u8,
    pub prompt: &'static str,
}

/// Field prompts and the choices offered by the multi-select questions,
/// in display order.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOptionsResponse {
    pub fields: Vec<FieldPromptResponse>,
    pub roles: Vec<OptionResponse>,
    pub high_risk_categories: Vec<OptionResponse>,
    pub prohibited_tasks: Vec<OptionResponse>,
}

impl AssessmentOptionsResponse {
    pub fn build() -> Self {
        Self {
            fields: FieldId::ALL
                .iter()
                .map(|&field| FieldPromptResponse {
                    field,
                    step: field.step().number(),
                    prompt: field.prompt(),
                })
                .collect(),
            roles: RoleKind::ALL
                .iter()
                .map(|r| OptionResponse {
                    value: r.label(),
                    help: Some(r.help_text()),
                })
                .collect(),
            high_risk_categories: HighRiskCategory::ALL
                .iter()
                .map(|c| OptionResponse {
                    value: c.label(),
                    help: None,
                })
                .collect(),
            prohibited_tasks: ProhibitedTask::ALL
                .iter()
                .map(|t| OptionResponse {
                    value: t.label(),
                    help: None,
                })
                .collect(),
        }
    }
}
