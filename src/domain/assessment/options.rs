//! Fixed answer vocabularies offered by the compliance wizard.
//!
//! Each enum's declaration order is its canonical display order; sets of
//! these values are stored in `BTreeSet`s so every rendering and export
//! follows that order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Roles an organisation can hold towards an AI system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Provider,
    Deployer,
    Distributor,
    Importer,
}

impl RoleKind {
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Provider,
        RoleKind::Deployer,
        RoleKind::Distributor,
        RoleKind::Importer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoleKind::Provider => "Provider",
            RoleKind::Deployer => "Deployer",
            RoleKind::Distributor => "Distributor",
            RoleKind::Importer => "Importer",
        }
    }

    /// Short explanation shown next to the role picker.
    pub fn help_text(&self) -> &'static str {
        match self {
            RoleKind::Provider => "Develops the AI system",
            RoleKind::Deployer => "Uses an AI system",
            RoleKind::Distributor => "Makes the system available on the market",
            RoleKind::Importer => "Brings AI systems from outside the EU",
        }
    }
}

/// The eight high-risk use-case areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HighRiskCategory {
    #[serde(rename = "Education and vocational training")]
    Education,
    Employment,
    #[serde(rename = "Public services")]
    PublicServices,
    #[serde(rename = "Law enforcement")]
    LawEnforcement,
    Migration,
    #[serde(rename = "Administration of justice")]
    AdministrationOfJustice,
    #[serde(rename = "Critical infrastructure")]
    CriticalInfrastructure,
    #[serde(rename = "Product safety")]
    ProductSafety,
}

impl HighRiskCategory {
    pub const ALL: [HighRiskCategory; 8] = [
        HighRiskCategory::Education,
        HighRiskCategory::Employment,
        HighRiskCategory::PublicServices,
        HighRiskCategory::LawEnforcement,
        HighRiskCategory::Migration,
        HighRiskCategory::AdministrationOfJustice,
        HighRiskCategory::CriticalInfrastructure,
        HighRiskCategory::ProductSafety,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HighRiskCategory::Education => "Education and vocational training",
            HighRiskCategory::Employment => "Employment",
            HighRiskCategory::PublicServices => "Public services",
            HighRiskCategory::LawEnforcement => "Law enforcement",
            HighRiskCategory::Migration => "Migration",
            HighRiskCategory::AdministrationOfJustice => "Administration of justice",
            HighRiskCategory::CriticalInfrastructure => "Critical infrastructure",
            HighRiskCategory::ProductSafety => "Product safety",
        }
    }
}

/// Prohibited AI practices, plus the "None of the Above" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProhibitedTask {
    #[serde(rename = "Subliminal Manipulation")]
    SubliminalManipulation,
    #[serde(rename = "Social Scoring")]
    SocialScoring,
    #[serde(rename = "Real-time Biometric ID")]
    RealTimeBiometricId,
    #[serde(rename = "Exploitation of Vulnerabilities")]
    ExploitationOfVulnerabilities,
    #[serde(rename = "Emotion Recognition")]
    EmotionRecognition,
    #[serde(rename = "Predictive Policing")]
    PredictivePolicing,
    #[serde(rename = "None of the Above")]
    NoneOfTheAbove,
}

impl ProhibitedTask {
    pub const ALL: [ProhibitedTask; 7] = [
        ProhibitedTask::SubliminalManipulation,
        ProhibitedTask::SocialScoring,
        ProhibitedTask::RealTimeBiometricId,
        ProhibitedTask::ExploitationOfVulnerabilities,
        ProhibitedTask::EmotionRecognition,
        ProhibitedTask::PredictivePolicing,
        ProhibitedTask::NoneOfTheAbove,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProhibitedTask::SubliminalManipulation => "Subliminal Manipulation",
            ProhibitedTask::SocialScoring => "Social Scoring",
            ProhibitedTask::RealTimeBiometricId => "Real-time Biometric ID",
            ProhibitedTask::ExploitationOfVulnerabilities => "Exploitation of Vulnerabilities",
            ProhibitedTask::EmotionRecognition => "Emotion Recognition",
            ProhibitedTask::PredictivePolicing => "Predictive Policing",
            ProhibitedTask::NoneOfTheAbove => "None of the Above",
        }
    }

    /// True for the "None of the Above" sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, ProhibitedTask::NoneOfTheAbove)
    }
}

macro_rules! label_parsing {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        ValidationError::invalid_format($field, format!("unknown option '{}'", s))
                    })
            }
        }
    };
}

label_parsing!(RoleKind, "role");
label_parsing!(HighRiskCategory, "high_risk_category");
label_parsing!(ProhibitedTask, "prohibited_task");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for role in RoleKind::ALL {
            assert_eq!(role.label().parse::<RoleKind>().unwrap(), role);
        }
        for cat in HighRiskCategory::ALL {
            assert_eq!(cat.label().parse::<HighRiskCategory>().unwrap(), cat);
        }
        for task in ProhibitedTask::ALL {
            assert_eq!(task.label().parse::<ProhibitedTask>().unwrap(), task);
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" social scoring ".parse::<ProhibitedTask>().unwrap(), ProhibitedTask::SocialScoring);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Astrology".parse::<HighRiskCategory>().unwrap_err();
        assert!(err.to_string().contains("high_risk_category"));
    }

    #[test]
    fn serde_uses_display_labels() {
        let json = serde_json::to_string(&HighRiskCategory::Education).unwrap();
        assert_eq!(json, "\"Education and vocational training\"");
        let task: ProhibitedTask = serde_json::from_str("\"None of the Above\"").unwrap();
        assert!(task.is_sentinel());
    }

    #[test]
    fn only_the_sentinel_is_sentinel() {
        let sentinels: Vec<_> = ProhibitedTask::ALL.iter().filter(|t| t.is_sentinel()).collect();
        assert_eq!(sentinels, vec![&ProhibitedTask::NoneOfTheAbove]);
    }

    #[test]
    fn every_role_has_help_text() {
        assert!(RoleKind::ALL.iter().all(|r| !r.help_text().is_empty()));
    }
}
