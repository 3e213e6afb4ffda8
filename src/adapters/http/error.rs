//! JSON error bodies shared by all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Body for a domain error; `details` only when `verbose`.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let details = (verbose && !error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidFieldForStep => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::AssessmentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::GuardNotSatisfied
        | ErrorCode::NotCompleted => StatusCode::CONFLICT,
        ErrorCode::StorageError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Renders a domain error as `(status, json body)`.
pub fn domain_error_response(error: DomainError, verbose: bool) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, message = %error.message, "Request failed");
    } else {
        tracing::warn!(code = %error.code, message = %error.message, "Request rejected");
    }
    (status, Json(ErrorResponse::from_domain(&error, verbose))).into_response()
}
