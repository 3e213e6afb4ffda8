//! Wizard steps and the lifecycle state machine.
//!
//! # Transitions
//!
//! ```text
//! Step1 <-> Step2 <-> Step3 -> Completed
//!   ^                              |
//!   +------------ reset -----------+
//! ```
//!
//! Guards (role selection) live on `WizardSession`; this table only says
//! which moves exist.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Percentage, StateMachine};

/// Number of question sections.
pub const TOTAL_STEPS: u8 = 3;

/// One of the three question sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Jurisdiction,
    RiskClassification,
    OperationalDomain,
}

impl WizardStep {
    /// 1-based position shown as "Step n of 3".
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Jurisdiction => 1,
            WizardStep::RiskClassification => 2,
            WizardStep::OperationalDomain => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Jurisdiction => "Jurisdiction & User Role",
            WizardStep::RiskClassification => "AI Risk Classification",
            WizardStep::OperationalDomain => "Operational Design Domain (ODD)",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), TOTAL_STEPS)
    }
}

/// Lifecycle state of a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    #[default]
    Step1,
    Step2,
    Step3,
    Completed,
}

impl WizardState {
    /// The section on screen; a completed wizard stays on its last section.
    pub fn step(&self) -> WizardStep {
        match self {
            WizardState::Step1 => WizardStep::Jurisdiction,
            WizardState::Step2 => WizardStep::RiskClassification,
            WizardState::Step3 | WizardState::Completed => WizardStep::OperationalDomain,
        }
    }

    /// Forward target of `advance`, if any.
    pub fn next(&self) -> Option<WizardState> {
        match self {
            WizardState::Step1 => Some(WizardState::Step2),
            WizardState::Step2 => Some(WizardState::Step3),
            WizardState::Step3 => Some(WizardState::Completed),
            WizardState::Completed => None,
        }
    }

    /// Backward target of `retreat`, if any.
    pub fn previous(&self) -> Option<WizardState> {
        match self {
            WizardState::Step2 => Some(WizardState::Step1),
            WizardState::Step3 => Some(WizardState::Step2),
            WizardState::Step1 | WizardState::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, WizardState::Completed)
    }

    /// Progress bar value: `step / (TOTAL_STEPS + 1)`, full once completed.
    pub fn progress(&self) -> Percentage {
        if self.is_completed() {
            return Percentage::HUNDRED;
        }
        Percentage::from_ratio(u32::from(self.step().number()), u32::from(TOTAL_STEPS) + 1)
    }
}

impl StateMachine for WizardState {
    fn valid_transitions(&self) -> Vec<Self> {
        use WizardState::*;
        match self {
            Step1 => vec![Step2],
            Step2 => vec![Step3, Step1],
            Step3 => vec![Step2, Completed],
            Completed => vec![Step1],
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardState::Step1 => "Step1",
            WizardState::Step2 => "Step2",
            WizardState::Step3 => "Step3",
            WizardState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
