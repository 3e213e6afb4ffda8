//! Assessment command and query handlers.

mod errors;
mod export_report;
mod get_assessment;
mod get_recommendation;
mod navigate;
mod start_assessment;
mod update_answer;

pub use errors::AssessmentError;
pub use export_report::{ExportReportHandler, ExportReportQuery};
pub use get_assessment::{AssessmentView, GetAssessmentHandler, GetAssessmentQuery};
pub use get_recommendation::{GetRecommendationHandler, GetRecommendationQuery};
pub use navigate::{Direction, NavigateCommand, NavigateHandler};
pub use start_assessment::StartAssessmentHandler;
pub use update_answer::{UpdateAnswerCommand, UpdateAnswerHandler};
