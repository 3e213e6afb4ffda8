//! Application router: API routes, health probe and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::assessment::{assessment_routes, AssessmentHandlers};
use super::library::{library_routes, LibraryHandlers};
use crate::config::AppConfig;
use crate::ports::{RecordStore, WizardSessionStore};

/// Ports the HTTP layer is wired to.
#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn WizardSessionStore>,
    pub record_store: Arc<dyn RecordStore>,
}

/// Assemble the full application router.
///
/// ```text
/// TraceLayer (optional) → CorsLayer → TimeoutLayer → Handler
/// ```
pub fn app_router(state: AppState, config: &AppConfig) -> Router {
    let assessments = AssessmentHandlers::new(state.session_store, config.features.verbose_errors);
    let library = LibraryHandlers::new(state.record_store);

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api/assessments", assessment_routes(assessments))
        .nest("/api", library_routes(library))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(config));

    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// Configured origins, or any origin outside production when none are set.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        if config.is_production() {
            return CorsLayer::new();
        }
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
