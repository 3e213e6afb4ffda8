//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::{
    AssessmentError, Direction, ExportReportHandler, ExportReportQuery, GetAssessmentHandler,
    GetAssessmentQuery, GetRecommendationHandler, GetRecommendationQuery, NavigateCommand,
    NavigateHandler, StartAssessmentHandler, UpdateAnswerCommand, UpdateAnswerHandler,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::WizardSessionStore;

use super::dto::{parse_answer_update, AssessmentOptionsResponse, AssessmentResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartAssessmentHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    update_handler: Arc<UpdateAnswerHandler>,
    navigate_handler: Arc<NavigateHandler>,
    recommendation_handler: Arc<GetRecommendationHandler>,
    report_handler: Arc<ExportReportHandler>,
    verbose_errors: bool,
}

impl AssessmentHandlers {
    pub fn new(store: Arc<dyn WizardSessionStore>, verbose_errors: bool) -> Self {
        Self {
            start_handler: Arc::new(StartAssessmentHandler::new(store.clone())),
            get_handler: Arc::new(GetAssessmentHandler::new(store.clone())),
            update_handler: Arc::new(UpdateAnswerHandler::new(store.clone())),
            navigate_handler: Arc::new(NavigateHandler::new(store.clone())),
            recommendation_handler: Arc::new(GetRecommendationHandler::new(store.clone())),
            report_handler: Arc::new(ExportReportHandler::new(store)),
            verbose_errors,
        }
    }

    fn error(&self, error: AssessmentError) -> Response {
        domain_error_response(error.into(), self.verbose_errors)
    }

    fn invalid_id(&self, raw: &str) -> Response {
        let error = DomainError::new(ErrorCode::ValidationFailed, "Invalid assessment ID")
            .with_detail("assessment_id", raw);
        domain_error_response(error, self.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a new assessment
pub async fn start_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(session) => {
            (StatusCode::CREATED, Json(AssessmentResponse::from(&session))).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// GET /api/assessments/options - Choices for the multi-select questions
pub async fn get_options() -> Json<AssessmentOptionsResponse> {
    Json(AssessmentOptionsResponse::build())
}

/// GET /api/assessments/:id - Current wizard view
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(assessment_id) = id.parse::<AssessmentId>() else {
        return handlers.invalid_id(&id);
    };

    match handlers
        .get_handler
        .handle(GetAssessmentQuery { assessment_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(AssessmentResponse::from(view))).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// PATCH /api/assessments/:id/answers - Write one answer field
pub async fn update_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let Ok(assessment_id) = id.parse::<AssessmentId>() else {
        return handlers.invalid_id(&id);
    };

    let parsed = body
        .map_err(|rejection| {
            DomainError::new(ErrorCode::ValidationFailed, rejection.body_text())
        })
        .and_then(|Json(value)| parse_answer_update(value));
    let update = match parsed {
        Ok(update) => update,
        Err(e) => return domain_error_response(e, handlers.verbose_errors),
    };

    let cmd = UpdateAnswerCommand {
        assessment_id,
        update,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handlers.error(e),
    }
}

async fn navigate(handlers: AssessmentHandlers, id: String, direction: Direction) -> Response {
    let Ok(assessment_id) = id.parse::<AssessmentId>() else {
        return handlers.invalid_id(&id);
    };

    let cmd = NavigateCommand {
        assessment_id,
        direction,
    };

    match handlers.navigate_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/assessments/:id/advance - Move to the next step
pub async fn advance(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
) -> Response {
    navigate(handlers, id, Direction::Advance).await
}

/// POST /api/assessments/:id/retreat - Move to the previous step
pub async fn retreat(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
) -> Response {
    navigate(handlers, id, Direction::Retreat).await
}

/// POST /api/assessments/:id/reset - Start over
pub async fn reset(State(handlers): State<AssessmentHandlers>, Path(id): Path<String>) -> Response {
    navigate(handlers, id, Direction::Reset).await
}

/// GET /api/assessments/:id/recommendation - Guidance for a completed assessment
pub async fn get_recommendation(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(assessment_id) = id.parse::<AssessmentId>() else {
        return handlers.invalid_id(&id);
    };

    match handlers
        .recommendation_handler
        .handle(GetRecommendationQuery { assessment_id })
        .await
    {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/assessments/:id/report - CSV download
pub async fn export_report(
    State(handlers): State<AssessmentHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Ok(assessment_id) = id.parse::<AssessmentId>() else {
        return handlers.invalid_id(&id);
    };

    match handlers
        .report_handler
        .handle(ExportReportQuery { assessment_id })
        .await
    {
        Ok(report) => {
            let disposition = format!("attachment; filename=\"{}\"", report.file_name());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                report.to_csv(),
            )
                .into_response()
        }
        Err(e) => handlers.error(e),
    }
}
