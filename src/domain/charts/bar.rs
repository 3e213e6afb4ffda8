//! Horizontal bar chart used for persona bias metrics.

use serde::Serialize;

use crate::domain::library::RiskColor;

/// One labelled bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: RiskColor,
}

/// Horizontal bars on a fixed [0, 1] score axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub x_axis_title: &'static str,
    pub y_axis_title: &'static str,
    pub x_range: [f64; 2],
    pub height: u32,
}

/// Builds a bias bar chart; each bar is coloured by its score.
pub fn render_bar_chart(entries: impl IntoIterator<Item = (String, f64)>) -> BarChart {
    let bars = entries
        .into_iter()
        .map(|(label, value)| Bar {
            color: RiskColor::for_score(value),
            label,
            value,
        })
        .collect();

    BarChart {
        bars,
        x_axis_title: "Score",
        y_axis_title: "Bias Type",
        x_range: [0.0, 1.0],
        height: 200,
    }
}
