//! HTTP routes for library endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    get_evaluations, get_insights, get_personas, get_questions, get_responses, LibraryHandlers,
};

/// Creates the library router, mounted under `/api`.
pub fn library_routes(handlers: LibraryHandlers) -> Router {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/personas", get(get_personas))
        .route("/responses", get(get_responses))
        .route("/evaluations", get(get_evaluations))
        .route("/insights", get(get_insights))
        .with_state(handlers)
}
