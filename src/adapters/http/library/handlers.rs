//! HTTP handlers for library endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::{
    GetContributorInsightsHandler, GetEvaluationScoresHandler, GetLlmOutputsHandler,
    GetPersonaDirectoryHandler, GetPersonaDirectoryQuery, GetQuestionLibraryHandler,
    GetQuestionLibraryQuery,
};
use crate::ports::RecordStore;

use super::dto::{non_empty, PersonasParams, QuestionsParams};

#[derive(Clone)]
pub struct LibraryHandlers {
    questions_handler: Arc<GetQuestionLibraryHandler>,
    personas_handler: Arc<GetPersonaDirectoryHandler>,
    outputs_handler: Arc<GetLlmOutputsHandler>,
    evaluations_handler: Arc<GetEvaluationScoresHandler>,
    insights_handler: Arc<GetContributorInsightsHandler>,
}

impl LibraryHandlers {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            questions_handler: Arc::new(GetQuestionLibraryHandler::new(store.clone())),
            personas_handler: Arc::new(GetPersonaDirectoryHandler::new(store.clone())),
            outputs_handler: Arc::new(GetLlmOutputsHandler::new(store.clone())),
            evaluations_handler: Arc::new(GetEvaluationScoresHandler::new(store.clone())),
            insights_handler: Arc::new(GetContributorInsightsHandler::new(store)),
        }
    }
}

/// GET /api/questions?category=&subcategory=
pub async fn get_questions(
    State(handlers): State<LibraryHandlers>,
    Query(params): Query<QuestionsParams>,
) -> Response {
    let query = GetQuestionLibraryQuery {
        category: non_empty(params.category),
        subcategory: non_empty(params.subcategory),
    };
    Json(handlers.questions_handler.handle(query).await).into_response()
}

/// GET /api/personas?origin=
pub async fn get_personas(
    State(handlers): State<LibraryHandlers>,
    Query(params): Query<PersonasParams>,
) -> Response {
    let query = GetPersonaDirectoryQuery {
        origin: non_empty(params.origin),
    };
    Json(handlers.personas_handler.handle(query).await).into_response()
}

/// GET /api/responses
pub async fn get_responses(State(handlers): State<LibraryHandlers>) -> Response {
    Json(handlers.outputs_handler.handle().await).into_response()
}

/// GET /api/evaluations
pub async fn get_evaluations(State(handlers): State<LibraryHandlers>) -> Response {
    match handlers.evaluations_handler.handle().await {
        Ok(scores) => Json(scores).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build evaluation charts");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /api/insights
pub async fn get_insights(State(handlers): State<LibraryHandlers>) -> Response {
    Json(handlers.insights_handler.handle().await).into_response()
}
