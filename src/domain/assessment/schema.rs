//! Which answer fields exist at a given point of the wizard.
//!
//! The presentation layer renders exactly these fields and
//! `WizardSession::update_answer` accepts exactly these fields.

use std::collections::BTreeSet;

use super::answers::{AssessmentAnswers, FieldId};
use super::options::RoleKind;
use super::step::WizardState;

const JURISDICTION_FIELDS: [FieldId; 2] = [FieldId::IsEu, FieldId::Roles];

const CLASSIFICATION_FIELDS: [FieldId; 4] = [
    FieldId::PrimaryFunction,
    FieldId::HighRiskCategories,
    FieldId::ProhibitedTasks,
    FieldId::RequiresTransparency,
];

/// Extra questions for EU systems in a high-risk category.
const HIGH_RISK_FIELDS: [FieldId; 4] = [
    FieldId::RiskManagement,
    FieldId::HumanOversight,
    FieldId::DataProtection,
    FieldId::PostMarketPlan,
];

const ODD_FIELDS: [FieldId; 5] = [
    FieldId::Environment,
    FieldId::Users,
    FieldId::InputData,
    FieldId::TemporalConstraints,
    FieldId::Assumptions,
];

/// Returns the fields shown and accepted in `state` given the current answers.
///
/// A completed wizard accepts no fields.
pub fn visible_fields(state: WizardState, answers: &AssessmentAnswers) -> BTreeSet<FieldId> {
    let mut fields = BTreeSet::new();
    match state {
        WizardState::Step1 => fields.extend(JURISDICTION_FIELDS),
        WizardState::Step2 => {
            fields.extend(CLASSIFICATION_FIELDS);
            if answers.is_eu_high_risk() {
                fields.extend(HIGH_RISK_FIELDS);
            }
            if answers.has_role(RoleKind::Provider) {
                fields.insert(FieldId::AlgorithmicTransparency);
            }
        }
        WizardState::Step3 => fields.extend(ODD_FIELDS),
        WizardState::Completed => {}
    }
    fields
}
