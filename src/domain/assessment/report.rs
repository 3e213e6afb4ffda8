//! Flat, one-row export of a completed assessment.

use serde::Serialize;

use super::answers::{AssessmentAnswers, FieldId};
use super::errors::WizardError;
use crate::domain::foundation::Timestamp;

/// Column holding the completion date, always last.
pub const COMPLETION_COLUMN: &str = "completion_date";

/// File name prefix for downloaded reports.
pub const FILE_PREFIX: &str = "ai_act_assessment_";

/// One header/value pair of the exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCell {
    pub column: &'static str,
    pub value: String,
}

/// The answer set flattened into a single tabular row.
///
/// Columns follow canonical field order. Conditional fields that were never
/// shown are omitted; every other field is present even when blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentReport {
    cells: Vec<ReportCell>,
    completed_at: Timestamp,
}

impl AssessmentReport {
    pub fn cells(&self) -> &[ReportCell] {
        &self.cells
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.cells.iter().map(|c| c.column).collect()
    }

    /// Value of one column, if present.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.value.as_str())
    }

    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }

    /// `ai_act_assessment_<YYYYMMDD_HHMMSS>.csv`, stamped with completion time.
    pub fn file_name(&self) -> String {
        format!("{}{}.csv", FILE_PREFIX, self.completed_at.to_file_stamp())
    }

    /// Header line plus one data line, RFC 4180 quoting, `\n` terminated.
    pub fn to_csv(&self) -> String {
        let header = self
            .headers()
            .into_iter()
            .map(csv_field)
            .collect::<Vec<_>>()
            .join(",");
        let row = self
            .cells
            .iter()
            .map(|c| csv_field(&c.value))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}\n{}\n", header, row)
    }
}

/// Flattens a completed answer set into a report row.
///
/// # Errors
///
/// - `NotCompleted` if the answers carry no completion timestamp
pub fn export_report(answers: &AssessmentAnswers) -> Result<AssessmentReport, WizardError> {
    let completed_at = *answers
        .completion_timestamp()
        .ok_or(WizardError::NotCompleted)?;

    let mut cells: Vec<ReportCell> = FieldId::ALL
        .iter()
        .filter_map(|&field| {
            answers.field_text(field).map(|value| ReportCell {
                column: field.column(),
                value,
            })
        })
        .collect();
    cells.push(ReportCell {
        column: COMPLETION_COLUMN,
        value: completed_at.to_display_string(),
    });

    Ok(AssessmentReport {
        cells,
        completed_at,
    })
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
