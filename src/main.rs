//! Main entry point for the PBAS form service.
//!
//! Resolves configuration from the environment, builds the appraisal service
//! and serves the REST API (with Swagger UI) on the configured address.

use api_rest::{AppState, config_from_env, router};
use pbas_core::AppraisalService;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Start the PBAS form service.
///
/// # Environment Variables
/// - `PBAS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `FIRESTORE_PROJECT_ID`: Firebase project id (required)
/// - `FIRESTORE_DATABASE`, `FIRESTORE_COLLECTION`, `FIRESTORE_API_KEY`,
///   `FIRESTORE_BASE_URL`: optional document store settings
///
/// # Errors
/// Returns an error if configuration is incomplete, the address cannot be
/// bound, or the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pbas_run=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PBAS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let cfg = Arc::new(config_from_env()?);
    tracing::info!(
        project_id = cfg.project_id(),
        collection = cfg.collection(),
        "++ Starting PBAS form service on {}",
        addr
    );

    let state = AppState::new(Arc::new(AppraisalService::new(cfg)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
