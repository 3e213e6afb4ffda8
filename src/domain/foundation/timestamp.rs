//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format used when showing a completion date to the user.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used inside exported report file names.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[cfg(test)]
    pub(crate) fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Renders as `YYYY-MM-DD HH:MM:SS`.
    pub fn to_display_string(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Renders as `YYYYMMDD_HHMMSS`, safe for file names.
    pub fn to_file_stamp(&self) -> String {
        self.0.format(FILE_STAMP_FORMAT).to_string()
    }
}
