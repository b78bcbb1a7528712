//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! This binary is useful for development and debugging; deployments normally
//! run the workspace's main `pbas-run` binary instead.

use api_rest::{AppState, config_from_env, router};
use pbas_core::AppraisalService;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the PBAS REST API server.
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000)
/// with OpenAPI/Swagger documentation at `/swagger-ui`.
///
/// # Environment Variables
/// - `PBAS_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - plus the `FIRESTORE_*` variables read by [`config_from_env`]
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the Firestore configuration is incomplete,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("PBAS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("-- Starting PBAS REST API on {}", addr);

    let cfg = Arc::new(config_from_env()?);
    let state = AppState::new(Arc::new(AppraisalService::new(cfg)));

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
