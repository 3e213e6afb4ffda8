//! Chart artifacts - plain, serialisable chart descriptions.
//!
//! Rendering happens in the browser; these types only carry the data and
//! layout the dashboard draws.

mod bar;
mod radar;

pub use bar::{render_bar_chart, Bar, BarChart};
pub use radar::{render_radar_chart, AngularAxis, RadarChart, RadialAxis};

use thiserror::Error;

/// Errors raised while building a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Chart '{title}' has {values} values but {labels} labels")]
    LengthMismatch {
        title: String,
        values: usize,
        labels: usize,
    },
}
