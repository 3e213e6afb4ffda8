use serde::Serialize;

/// Traffic-light colour for scores and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskColor {
    Green,
    Orange,
    Red,
}

impl RiskColor {
    /// Colour for a score in [0, 1]: green below 0.3, orange below 0.6.
    pub fn for_score(score: f64) -> Self {
        if score < 0.3 {
            RiskColor::Green
        } else if score < 0.6 {
            RiskColor::Orange
        } else {
            RiskColor::Red
        }
    }

    /// Colour for a risk percentage: green below 25, orange below 50.
    pub fn for_percent(percent: f64) -> Self {
        if percent < 25.0 {
            RiskColor::Green
        } else if percent < 50.0 {
            RiskColor::Orange
        } else {
            RiskColor::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskColor::Green => "green",
            RiskColor::Orange => "orange",
            RiskColor::Red => "red",
        }
    }
}
