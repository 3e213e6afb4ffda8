//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    advance, export_report, get_assessment, get_options, get_recommendation, reset, retreat,
    start_assessment, update_answer, AssessmentHandlers,
};

/// Creates the assessment router, mounted under `/api/assessments`.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(start_assessment))
        .route("/options", get(get_options))
        .route("/:id", get(get_assessment))
        .route("/:id/answers", patch(update_answer))
        .route("/:id/advance", post(advance))
        .route("/:id/retreat", post(retreat))
        .route("/:id/reset", post(reset))
        .route("/:id/recommendation", get(get_recommendation))
        .route("/:id/report", get(export_report))
        .with_state(handlers)
}
