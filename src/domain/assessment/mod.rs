//! Assessment module - the EU AI Act compliance wizard.
//!
//! A `WizardSession` walks the user through three sections, guarded so that
//! completion needs at least one role. Once completed, the answers feed the
//! recommendation rules, the recap and the one-row report export.

mod answers;
mod errors;
mod options;
mod recommendation;
mod report;
mod schema;
mod step;
mod summary;
mod wizard;

pub use answers::{AnswerUpdate, AssessmentAnswers, FieldId};
pub use errors::WizardError;
pub use options::{HighRiskCategory, ProhibitedTask, RoleKind};
pub use recommendation::{
    derive, prohibited_explanation, recommend, ProhibitedWarning, Recommendation, RiskTier,
    HIGH_RISK_OBLIGATIONS, HIGH_RISK_TIMELINE_NOTE,
};
pub use report::{export_report, AssessmentReport, ReportCell, COMPLETION_COLUMN};
pub use schema::visible_fields;
pub use step::{WizardState, WizardStep, TOTAL_STEPS};
pub use summary::{summarize, AssessmentSummary, SummaryLine};
pub use wizard::WizardSession;
