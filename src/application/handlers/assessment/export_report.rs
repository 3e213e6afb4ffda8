//! ExportReportHandler - Query handler producing the CSV report.

use std::sync::Arc;

use super::AssessmentError;
use crate::domain::assessment::{export_report, AssessmentReport};
use crate::domain::foundation::AssessmentId;
use crate::ports::WizardSessionStore;

#[derive(Debug, Clone)]
pub struct ExportReportQuery {
    pub assessment_id: AssessmentId,
}

pub struct ExportReportHandler {
    store: Arc<dyn WizardSessionStore>,
}

impl ExportReportHandler {
    pub fn new(store: Arc<dyn WizardSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ExportReportQuery) -> Result<AssessmentReport, AssessmentError> {
        let session = self.store.load(query.assessment_id).await?;
        let report = export_report(session.answers())?;

        tracing::info!(
            assessment_id = %query.assessment_id,
            file = %report.file_name(),
            "Report exported"
        );
        Ok(report)
    }
}
