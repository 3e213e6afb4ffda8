//! Integration tests for the assessment wizard through the public domain API.
//!
//! Each test walks a session the way a user would and checks the results
//! that leave the wizard: summary, recommendation and CSV report.

use level_ethics::domain::assessment::{
    export_report, recommend, summarize, AnswerUpdate, FieldId, HighRiskCategory, ProhibitedTask,
    RiskTier, RoleKind, WizardError, WizardSession, WizardState, HIGH_RISK_OBLIGATIONS,
};
use level_ethics::domain::foundation::AssessmentId;

fn roles(list: &[RoleKind]) -> AnswerUpdate {
    AnswerUpdate::Roles(list.iter().copied().collect())
}

fn high_risk_provider() -> WizardSession {
    let mut session = WizardSession::new(AssessmentId::new());
    session.update_answer(AnswerUpdate::IsEu(true)).unwrap();
    session.update_answer(roles(&[RoleKind::Provider])).unwrap();
    session.advance().unwrap();

    session
        .update_answer(AnswerUpdate::PrimaryFunction("CV screening".into()))
        .unwrap();
    session
        .update_answer(AnswerUpdate::HighRiskCategories(
            [HighRiskCategory::Employment].into_iter().collect(),
        ))
        .unwrap();
    session
        .update_answer(AnswerUpdate::RiskManagement("Quarterly review, \"red team\"".into()))
        .unwrap();
    session
        .update_answer(AnswerUpdate::AlgorithmicTransparency("Model card published".into()))
        .unwrap();
    session.advance().unwrap();

    session
        .update_answer(AnswerUpdate::Environment("Cloud, EU region".into()))
        .unwrap();
    session
        .update_answer(AnswerUpdate::Users("HR staff".into()))
        .unwrap();
    session.advance().unwrap();
    session
}

#[test]
fn high_risk_provider_end_to_end() {
    let session = high_risk_provider();
    assert_eq!(session.state(), WizardState::Completed);

    let answers = session.snapshot();
    let rec = recommend(&answers).unwrap();
    assert_eq!(rec.risk_tier, RiskTier::HighRisk);
    assert_eq!(rec.obligations, HIGH_RISK_OBLIGATIONS.to_vec());
    assert!(rec.timeline_note.is_some());

    let summary = summarize(&answers).unwrap();
    assert_eq!(summary.value("EU Relevant"), Some("Yes"));
    assert_eq!(summary.value("Environment"), Some("Cloud, EU region"));

    let report = export_report(&answers).unwrap();
    let headers = report.headers();
    assert!(headers.contains(&"risk_management"));
    assert!(headers.contains(&"algorithmic_transparency"));
    assert!(!headers.contains(&"human_oversight"));
    assert_eq!(headers.last(), Some(&"completion_date"));

    let csv = report.to_csv();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("is_eu,roles,primary_function"));
    let row = lines.next().unwrap();
    assert!(row.contains("\"Quarterly review, \"\"red team\"\"\""));
    assert!(row.contains("\"Cloud, EU region\""));
}

#[test]
fn outside_eu_gets_no_guidance_even_with_prohibited_tasks() {
    let mut session = WizardSession::new(AssessmentId::new());
    session.update_answer(roles(&[RoleKind::Deployer])).unwrap();
    session.advance().unwrap();
    session
        .update_answer(AnswerUpdate::ProhibitedTasks(
            [ProhibitedTask::SocialScoring].into_iter().collect(),
        ))
        .unwrap();
    session.advance().unwrap();
    session.advance().unwrap();

    let rec = recommend(session.answers()).unwrap();
    assert_eq!(rec.risk_tier, RiskTier::NotApplicable);
    assert!(rec.prohibited_warnings.is_empty());
}

#[test]
fn navigation_keeps_answers_and_reset_clears_them() {
    let mut session = WizardSession::new(AssessmentId::new());
    session.update_answer(AnswerUpdate::IsEu(true)).unwrap();
    session.update_answer(roles(&[RoleKind::Importer])).unwrap();
    session.advance().unwrap();
    session
        .update_answer(AnswerUpdate::PrimaryFunction("Translation".into()))
        .unwrap();

    session.retreat().unwrap();
    assert_eq!(session.state(), WizardState::Step1);
    assert_eq!(session.answers().primary_function, "Translation");

    session.reset();
    assert_eq!(session.state(), WizardState::Step1);
    assert!(session.answers().is_empty());
}

#[test]
fn results_are_refused_before_completion() {
    let mut session = WizardSession::new(AssessmentId::new());
    session.update_answer(roles(&[RoleKind::Distributor])).unwrap();
    session.advance().unwrap();
    session.advance().unwrap();

    assert_eq!(recommend(session.answers()), Err(WizardError::NotCompleted));
    assert_eq!(
        export_report(session.answers()).unwrap_err(),
        WizardError::NotCompleted
    );
    assert!(summarize(session.answers()).is_err());
}

#[test]
fn conditional_fields_follow_earlier_answers() {
    let mut session = WizardSession::new(AssessmentId::new());
    session.update_answer(roles(&[RoleKind::Deployer])).unwrap();
    session.advance().unwrap();

    assert!(!session.visible_fields().contains(&FieldId::AlgorithmicTransparency));
    let err = session
        .update_answer(AnswerUpdate::HumanOversight("Operator".into()))
        .unwrap_err();
    assert!(matches!(err, WizardError::InvalidFieldForStep { .. }));
}
