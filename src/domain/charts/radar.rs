//! Radar (polar area) chart used for evaluation scores.

use serde::Serialize;

use super::ChartError;

const LINE_COLOR: &str = "rgb(67, 147, 195)";
const FILL_COLOR: &str = "rgba(67, 147, 195, 0.2)";
const GRID_TICKS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Score axis, fixed to [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialAxis {
    pub visible: bool,
    pub range: [f64; 2],
    pub tick_vals: Vec<f64>,
    pub tick_text: Vec<String>,
}

/// Category axis around the circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngularAxis {
    pub direction: &'static str,
    pub rotation: u16,
}

/// A single closed polygon over named axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    /// Radii, first value repeated at the end.
    pub r: Vec<f64>,
    /// Axis labels, first label repeated at the end.
    pub theta: Vec<String>,
    pub fill: &'static str,
    pub line_color: &'static str,
    pub line_width: u8,
    pub fill_color: &'static str,
    pub radial_axis: RadialAxis,
    pub angular_axis: AngularAxis,
    pub height: u32,
    pub show_legend: bool,
}

/// Builds a radar chart from parallel `values` and `labels`.
///
/// # Errors
///
/// - `LengthMismatch` if the two slices differ in length
pub fn render_radar_chart(
    values: &[f64],
    labels: &[String],
    title: &str,
) -> Result<RadarChart, ChartError> {
    if values.len() != labels.len() {
        return Err(ChartError::LengthMismatch {
            title: title.to_string(),
            values: values.len(),
            labels: labels.len(),
        });
    }

    let mut r = values.to_vec();
    let mut theta = labels.to_vec();
    if let (Some(&first_value), Some(first_label)) = (values.first(), labels.first()) {
        r.push(first_value);
        theta.push(first_label.clone());
    }

    Ok(RadarChart {
        title: title.to_string(),
        r,
        theta,
        fill: "toself",
        line_color: LINE_COLOR,
        line_width: 2,
        fill_color: FILL_COLOR,
        radial_axis: RadialAxis {
            visible: true,
            range: [0.0, 1.0],
            tick_vals: GRID_TICKS.to_vec(),
            tick_text: GRID_TICKS.iter().map(|t| format!("{:.1}", t)).collect(),
        },
        angular_axis: AngularAxis {
            direction: "clockwise",
            rotation: 90,
        },
        height: 420,
        show_legend: false,
    })
}
