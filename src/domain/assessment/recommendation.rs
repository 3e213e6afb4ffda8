//! Rule-based guidance derived from a completed assessment.
//!
//! This is an illustrative, simplified reading of the EU AI Act. It is not a
//! legal determination.
//!
//! Rules:
//! 1. Not EU relevant: `NotApplicable`, nothing else.
//! 2. EU relevant with high-risk categories: `HighRisk`, seven obligations,
//!    deadline note.
//! 3. EU relevant otherwise: `RegulatedNonHighRisk`.
//! 4. EU relevant, any tier: one warning per selected prohibited practice.
//!    The "None of the Above" sentinel never produces a warning.

use serde::{Deserialize, Serialize};

use super::answers::AssessmentAnswers;
use super::errors::WizardError;
use super::options::ProhibitedTask;

/// Regulatory tier of the assessed system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    NotApplicable,
    RegulatedNonHighRisk,
    HighRisk,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::NotApplicable => "Not applicable (outside EU scope)",
            RiskTier::RegulatedNonHighRisk => "Regulated, not high-risk",
            RiskTier::HighRisk => "High-risk",
        }
    }
}

/// Obligations for high-risk systems, in the order they are presented.
pub const HIGH_RISK_OBLIGATIONS: [&str; 7] = [
    "Establish and maintain a risk management system across the whole lifecycle",
    "Draw up technical documentation before placing the system on the market",
    "Keep automatically generated logs for record keeping and traceability",
    "Design the system for effective human oversight",
    "Ensure appropriate accuracy, robustness and cybersecurity",
    "Complete a conformity assessment before placing on the market or putting into service",
    "Register the system in the EU database for high-risk AI systems",
];

/// Deadline note attached to high-risk results.
pub const HIGH_RISK_TIMELINE_NOTE: &str =
    "High-risk obligations apply from 2 August 2026; plan documentation and conformity work well ahead of that date.";

/// A prohibited practice selected by the user and why it is a problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProhibitedWarning {
    pub task: ProhibitedTask,
    pub explanation: &'static str,
}

/// Categorised guidance for one set of answers. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub risk_tier: RiskTier,
    pub obligations: Vec<&'static str>,
    pub prohibited_warnings: Vec<ProhibitedWarning>,
    pub timeline_note: Option<&'static str>,
}

/// Fixed explanation for a prohibited practice; `None` for the sentinel.
pub fn prohibited_explanation(task: ProhibitedTask) -> Option<&'static str> {
    let text = match task {
        ProhibitedTask::SubliminalManipulation => {
            "Subliminal techniques that materially distort a person's behaviour in a harmful way are banned."
        }
        ProhibitedTask::SocialScoring => {
            "Scoring people on social behaviour or personal traits that leads to detrimental or disproportionate treatment is banned."
        }
        ProhibitedTask::RealTimeBiometricId => {
            "Real-time remote biometric identification in publicly accessible spaces for law enforcement is banned outside narrow exceptions."
        }
        ProhibitedTask::ExploitationOfVulnerabilities => {
            "Exploiting vulnerabilities linked to age, disability or social or economic situation is banned."
        }
        ProhibitedTask::EmotionRecognition => {
            "Inferring emotions in workplaces and education institutions is banned except for medical or safety reasons."
        }
        ProhibitedTask::PredictivePolicing => {
            "Predicting criminal offences based solely on profiling or personality traits is banned."
        }
        ProhibitedTask::NoneOfTheAbove => return None,
    };
    Some(text)
}

/// Derives guidance from an answer set. Pure: same answers, same result.
///
/// Only `is_eu`, `high_risk_categories` and `prohibited_tasks` are read.
pub fn derive(answers: &AssessmentAnswers) -> Recommendation {
    if !answers.is_eu {
        return Recommendation {
            risk_tier: RiskTier::NotApplicable,
            obligations: Vec::new(),
            prohibited_warnings: Vec::new(),
            timeline_note: None,
        };
    }

    let (risk_tier, obligations, timeline_note) = if answers.high_risk_categories.is_empty() {
        (RiskTier::RegulatedNonHighRisk, Vec::new(), None)
    } else {
        (
            RiskTier::HighRisk,
            HIGH_RISK_OBLIGATIONS.to_vec(),
            Some(HIGH_RISK_TIMELINE_NOTE),
        )
    };

    let prohibited_warnings = answers
        .prohibited_tasks
        .iter()
        .filter(|task| !task.is_sentinel())
        .filter_map(|&task| {
            prohibited_explanation(task).map(|explanation| ProhibitedWarning { task, explanation })
        })
        .collect();

    Recommendation {
        risk_tier,
        obligations,
        prohibited_warnings,
        timeline_note,
    }
}

/// Guidance for the answers of a completed assessment.
///
/// Completion is read from the answers' completion timestamp, which the
/// wizard sets exactly when it reaches `Completed`.
///
/// # Errors
///
/// - `NotCompleted` if the answers were never completed
pub fn recommend(answers: &AssessmentAnswers) -> Result<Recommendation, WizardError> {
    if answers.completion_timestamp().is_none() {
        return Err(WizardError::NotCompleted);
    }
    Ok(derive(answers))
}
