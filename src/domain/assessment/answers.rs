//! Answer set collected by the compliance wizard.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::options::{HighRiskCategory, ProhibitedTask, RoleKind};
use super::step::WizardStep;
use crate::domain::foundation::Timestamp;

/// Identifies one answer field.
///
/// Declaration order is the canonical field order used by schemas, summaries
/// and exported reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    IsEu,
    Roles,
    PrimaryFunction,
    HighRiskCategories,
    ProhibitedTasks,
    RequiresTransparency,
    RiskManagement,
    HumanOversight,
    DataProtection,
    PostMarketPlan,
    AlgorithmicTransparency,
    Environment,
    Users,
    InputData,
    TemporalConstraints,
    Assumptions,
}

impl FieldId {
    pub const ALL: [FieldId; 16] = [
        FieldId::IsEu,
        FieldId::Roles,
        FieldId::PrimaryFunction,
        FieldId::HighRiskCategories,
        FieldId::ProhibitedTasks,
        FieldId::RequiresTransparency,
        FieldId::RiskManagement,
        FieldId::HumanOversight,
        FieldId::DataProtection,
        FieldId::PostMarketPlan,
        FieldId::AlgorithmicTransparency,
        FieldId::Environment,
        FieldId::Users,
        FieldId::InputData,
        FieldId::TemporalConstraints,
        FieldId::Assumptions,
    ];

    /// Column name in exported reports; matches the serde name.
    pub fn column(&self) -> &'static str {
        match self {
            FieldId::IsEu => "is_eu",
            FieldId::Roles => "roles",
            FieldId::PrimaryFunction => "primary_function",
            FieldId::HighRiskCategories => "high_risk_categories",
            FieldId::ProhibitedTasks => "prohibited_tasks",
            FieldId::RequiresTransparency => "requires_transparency",
            FieldId::RiskManagement => "risk_management",
            FieldId::HumanOversight => "human_oversight",
            FieldId::DataProtection => "data_protection",
            FieldId::PostMarketPlan => "post_market_plan",
            FieldId::AlgorithmicTransparency => "algorithmic_transparency",
            FieldId::Environment => "environment",
            FieldId::Users => "users",
            FieldId::InputData => "input_data",
            FieldId::TemporalConstraints => "temporal_constraints",
            FieldId::Assumptions => "assumptions",
        }
    }

    /// Question text shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            FieldId::IsEu => {
                "Is your system made available in the EU or affects people in the EU?"
            }
            FieldId::Roles => "What is your role regarding the AI system? (Select all that apply)",
            FieldId::PrimaryFunction => "What is your system's primary function?",
            FieldId::HighRiskCategories => "Does it fall into any high-risk categories?",
            FieldId::ProhibitedTasks => "Does the system perform any prohibited tasks?",
            FieldId::RequiresTransparency => {
                "Does the system require transparency (e.g., chatbot or deepfake)?"
            }
            FieldId::RiskManagement => "Documented risk management system?",
            FieldId::HumanOversight => "Measures for human oversight?",
            FieldId::DataProtection => "Compliance with data protection (e.g., GDPR)?",
            FieldId::PostMarketPlan => "Plan for continuous monitoring?",
            FieldId::AlgorithmicTransparency => {
                "How do you document your system's decision process?"
            }
            FieldId::Environment => "Environment where the system operates?",
            FieldId::Users => "Who are the users? Provide details.",
            FieldId::InputData => "What input data does your system use?",
            FieldId::TemporalConstraints => "Any temporal constraints?",
            FieldId::Assumptions => "What assumptions does the system make?",
        }
    }

    /// The wizard step that collects this field.
    pub fn step(&self) -> WizardStep {
        match self {
            FieldId::IsEu | FieldId::Roles => WizardStep::Jurisdiction,
            FieldId::Environment
            | FieldId::Users
            | FieldId::InputData
            | FieldId::TemporalConstraints
            | FieldId::Assumptions => WizardStep::OperationalDomain,
            _ => WizardStep::RiskClassification,
        }
    }
}

/// A single answer write, carrying its typed value.
///
/// Serialized adjacently tagged, e.g. `{"field": "roles", "value": ["Provider"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum AnswerUpdate {
    IsEu(bool),
    Roles(BTreeSet<RoleKind>),
    PrimaryFunction(String),
    HighRiskCategories(BTreeSet<HighRiskCategory>),
    ProhibitedTasks(BTreeSet<ProhibitedTask>),
    RequiresTransparency(bool),
    RiskManagement(String),
    HumanOversight(String),
    DataProtection(String),
    PostMarketPlan(String),
    AlgorithmicTransparency(String),
    Environment(String),
    Users(String),
    InputData(String),
    TemporalConstraints(String),
    Assumptions(String),
}

impl AnswerUpdate {
    pub fn field(&self) -> FieldId {
        match self {
            AnswerUpdate::IsEu(_) => FieldId::IsEu,
            AnswerUpdate::Roles(_) => FieldId::Roles,
            AnswerUpdate::PrimaryFunction(_) => FieldId::PrimaryFunction,
            AnswerUpdate::HighRiskCategories(_) => FieldId::HighRiskCategories,
            AnswerUpdate::ProhibitedTasks(_) => FieldId::ProhibitedTasks,
            AnswerUpdate::RequiresTransparency(_) => FieldId::RequiresTransparency,
            AnswerUpdate::RiskManagement(_) => FieldId::RiskManagement,
            AnswerUpdate::HumanOversight(_) => FieldId::HumanOversight,
            AnswerUpdate::DataProtection(_) => FieldId::DataProtection,
            AnswerUpdate::PostMarketPlan(_) => FieldId::PostMarketPlan,
            AnswerUpdate::AlgorithmicTransparency(_) => FieldId::AlgorithmicTransparency,
            AnswerUpdate::Environment(_) => FieldId::Environment,
            AnswerUpdate::Users(_) => FieldId::Users,
            AnswerUpdate::InputData(_) => FieldId::InputData,
            AnswerUpdate::TemporalConstraints(_) => FieldId::TemporalConstraints,
            AnswerUpdate::Assumptions(_) => FieldId::Assumptions,
        }
    }
}

/// Everything a user has told the wizard so far.
///
/// Conditional free-text answers are `None` until written and are never
/// cleared when the answers that enabled them change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswers {
    pub is_eu: bool,
    pub roles: BTreeSet<RoleKind>,
    pub primary_function: String,
    pub high_risk_categories: BTreeSet<HighRiskCategory>,
    pub prohibited_tasks: BTreeSet<ProhibitedTask>,
    pub requires_transparency: bool,

    pub risk_management: Option<String>,
    pub human_oversight: Option<String>,
    pub data_protection: Option<String>,
    pub post_market_plan: Option<String>,
    pub algorithmic_transparency: Option<String>,

    pub environment: String,
    pub users: String,
    pub input_data: String,
    pub temporal_constraints: String,
    pub assumptions: String,

    /// Set only by the wizard when the assessment completes.
    #[serde(default)]
    completion_timestamp: Option<Timestamp>,
}

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one update; the last write to a field wins.
    pub fn apply(&mut self, update: AnswerUpdate) {
        match update {
            AnswerUpdate::IsEu(v) => self.is_eu = v,
            AnswerUpdate::Roles(v) => self.roles = v,
            AnswerUpdate::PrimaryFunction(v) => self.primary_function = v,
            AnswerUpdate::HighRiskCategories(v) => self.high_risk_categories = v,
            AnswerUpdate::ProhibitedTasks(v) => self.prohibited_tasks = v,
            AnswerUpdate::RequiresTransparency(v) => self.requires_transparency = v,
            AnswerUpdate::RiskManagement(v) => self.risk_management = Some(v),
            AnswerUpdate::HumanOversight(v) => self.human_oversight = Some(v),
            AnswerUpdate::DataProtection(v) => self.data_protection = Some(v),
            AnswerUpdate::PostMarketPlan(v) => self.post_market_plan = Some(v),
            AnswerUpdate::AlgorithmicTransparency(v) => self.algorithmic_transparency = Some(v),
            AnswerUpdate::Environment(v) => self.environment = v,
            AnswerUpdate::Users(v) => self.users = v,
            AnswerUpdate::InputData(v) => self.input_data = v,
            AnswerUpdate::TemporalConstraints(v) => self.temporal_constraints = v,
            AnswerUpdate::Assumptions(v) => self.assumptions = v,
        }
    }

    /// True when nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_role(&self, role: RoleKind) -> bool {
        self.roles.contains(&role)
    }

    /// EU-relevant and tagged with at least one high-risk category.
    pub fn is_eu_high_risk(&self) -> bool {
        self.is_eu && !self.high_risk_categories.is_empty()
    }

    pub fn completion_timestamp(&self) -> Option<&Timestamp> {
        self.completion_timestamp.as_ref()
    }

    pub(super) fn stamp_completion(&mut self, at: Timestamp) {
        self.completion_timestamp = Some(at);
    }

    /// Flat text rendering of a field, `None` for unset conditional fields.
    ///
    /// Booleans render as `true`/`false`; sets join their labels with ", ".
    pub fn field_text(&self, field: FieldId) -> Option<String> {
        let text = match field {
            FieldId::IsEu => self.is_eu.to_string(),
            FieldId::Roles => join_labels(self.roles.iter().map(|r| r.label())),
            FieldId::PrimaryFunction => self.primary_function.clone(),
            FieldId::HighRiskCategories => {
                join_labels(self.high_risk_categories.iter().map(|c| c.label()))
            }
            FieldId::ProhibitedTasks => join_labels(self.prohibited_tasks.iter().map(|t| t.label())),
            FieldId::RequiresTransparency => self.requires_transparency.to_string(),
            FieldId::RiskManagement => return self.risk_management.clone(),
            FieldId::HumanOversight => return self.human_oversight.clone(),
            FieldId::DataProtection => return self.data_protection.clone(),
            FieldId::PostMarketPlan => return self.post_market_plan.clone(),
            FieldId::AlgorithmicTransparency => return self.algorithmic_transparency.clone(),
            FieldId::Environment => self.environment.clone(),
            FieldId::Users => self.users.clone(),
            FieldId::InputData => self.input_data.clone(),
            FieldId::TemporalConstraints => self.temporal_constraints.clone(),
            FieldId::Assumptions => self.assumptions.clone(),
        };
        Some(text)
    }
}

pub(crate) fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
}
