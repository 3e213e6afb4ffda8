//! Human-readable recap shown once an assessment is completed.

use serde::Serialize;

use super::answers::{join_labels, AssessmentAnswers};
use super::errors::WizardError;

/// One labelled line of the recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

/// Completion date plus the answers worth re-reading, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentSummary {
    pub completed_on: String,
    pub lines: Vec<SummaryLine>,
}

impl AssessmentSummary {
    /// Value shown for a label, if that line exists.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Builds the recap for a completed answer set.
///
/// # Errors
///
/// - `NotCompleted` if the answers carry no completion timestamp
pub fn summarize(answers: &AssessmentAnswers) -> Result<AssessmentSummary, WizardError> {
    let completed_on = answers
        .completion_timestamp()
        .ok_or(WizardError::NotCompleted)?
        .to_display_string();

    let line = |label, value| SummaryLine { label, value };
    let lines = vec![
        line("EU Relevant", yes_no(answers.is_eu)),
        line("User Role(s)", join_labels(answers.roles.iter().map(|r| r.label()))),
        line("Primary Function", answers.primary_function.clone()),
        line(
            "High-Risk Categories",
            join_labels(answers.high_risk_categories.iter().map(|c| c.label())),
        ),
        line(
            "Prohibited Tasks",
            join_labels(answers.prohibited_tasks.iter().map(|t| t.label())),
        ),
        line("Requires Transparency", yes_no(answers.requires_transparency)),
        line("Environment", answers.environment.clone()),
        line("Users", answers.users.clone()),
        line("Input Data", answers.input_data.clone()),
        line("Temporal Constraints", answers.temporal_constraints.clone()),
        line("Assumptions", answers.assumptions.clone()),
    ];

    Ok(AssessmentSummary {
        completed_on,
        lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::answers::AnswerUpdate;
    use crate::domain::assessment::options::{ProhibitedTask, RoleKind};
    use crate::domain::assessment::wizard::WizardSession;
    use crate::domain::foundation::AssessmentId;

    #[test]
    fn summary_requires_completion() {
        assert_eq!(
            summarize(&AssessmentAnswers::new()),
            Err(WizardError::NotCompleted)
        );
    }

    #[test]
    fn summary_renders_flags_and_lists() {
        let mut s = WizardSession::new(AssessmentId::new());
        s.update_answer(AnswerUpdate::Roles(
            [RoleKind::Deployer, RoleKind::Distributor].into_iter().collect(),
        ))
        .unwrap();
        s.advance().unwrap();
        s.update_answer(AnswerUpdate::ProhibitedTasks(
            [ProhibitedTask::NoneOfTheAbove].into_iter().collect(),
        ))
        .unwrap();
        s.update_answer(AnswerUpdate::RequiresTransparency(true))
            .unwrap();
        s.advance().unwrap();
        s.advance().unwrap();

        let summary = summarize(s.answers()).unwrap();
        assert_eq!(summary.value("EU Relevant"), Some("No"));
        assert_eq!(summary.value("User Role(s)"), Some("Deployer, Distributor"));
        assert_eq!(summary.value("Prohibited Tasks"), Some("None of the Above"));
        assert_eq!(summary.value("Requires Transparency"), Some("Yes"));
        assert_eq!(summary.lines.len(), 11);
        assert_eq!(summary.completed_on.len(), "2025-01-01 00:00:00".len());
    }
}
