//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change wizard sessions; query handlers read sessions or
//! the reference library.

pub mod handlers;

pub use handlers::assessment::{
    AssessmentError, AssessmentView, Direction, ExportReportHandler, ExportReportQuery,
    GetAssessmentHandler, GetAssessmentQuery, GetRecommendationHandler, GetRecommendationQuery,
    NavigateCommand, NavigateHandler, StartAssessmentHandler, UpdateAnswerCommand,
    UpdateAnswerHandler,
};
pub use handlers::library::{
    GetContributorInsightsHandler, GetEvaluationScoresHandler, GetLlmOutputsHandler,
    GetPersonaDirectoryHandler, GetPersonaDirectoryQuery, GetQuestionLibraryHandler,
    GetQuestionLibraryQuery,
};
