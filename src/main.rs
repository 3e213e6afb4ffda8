//! Level Ethics - binary entry point.
//!
//! Loads configuration, initialises tracing and serves the HTTP API.

use std::sync::Arc;

use level_ethics::adapters::http::{app_router, AppState};
use level_ethics::adapters::{InMemoryWizardSessionStore, RecordFiles, YamlRecordStore};
use level_ethics::config::{AppConfig, DataConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    if !config.data.dir.is_dir() {
        tracing::warn!(
            dir = %config.data.dir.display(),
            "Data directory not found; library views will be empty"
        );
    }

    let state = AppState {
        session_store: Arc::new(InMemoryWizardSessionStore::new()),
        record_store: Arc::new(YamlRecordStore::with_files(
            &config.data.dir,
            record_files(&config.data),
        )),
    };
    let app = app_router(state, &config);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "Level Ethics listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; JSON lines in production.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn record_files(data: &DataConfig) -> RecordFiles {
    RecordFiles {
        questions: data.questions_file.clone(),
        personas: data.personas_file.clone(),
        responses: data.responses_file.clone(),
        evaluations: data.evaluations_file.clone(),
        insights: data.insights_file.clone(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
