//! # API REST
//!
//! REST API implementation for the PBAS form service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, download headers)
//!
//! The router is exposed so the workspace's `pbas-run` binary can mount it;
//! this crate also ships its own standalone server binary.

#![warn(rust_2018_idioms)]

use axum::{
    Router,
    extract::{Path as AxumPath, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE, HeaderName},
    },
    response::Json,
    routing::get,
};
use pbas_core::{AppraisalRecord, AppraisalService, CoreConfig};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    service: Arc<AppraisalService>,
}

impl AppState {
    pub fn new(service: Arc<AppraisalService>) -> Self {
        Self { service }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, fetch_record, generate_form),
    components(schemas(
        HealthRes,
        ErrorRes,
        AppraisalRecord,
        pbas_core::Qualification,
        pbas_core::ResearchDegree,
        pbas_core::PriorAppointment,
        pbas_core::CurrentPost,
        pbas_core::Course,
        pbas_core::Publication,
        pbas_core::ResearchPaper,
        pbas_core::TeachingData,
        pbas_core::ActivitiesData,
    ))
)]
struct ApiDoc;

/// Resolve service configuration from the process environment.
///
/// # Environment Variables
/// - `FIRESTORE_PROJECT_ID`: Firebase project id (required)
/// - `FIRESTORE_DATABASE`: database name (default: "(default)")
/// - `FIRESTORE_COLLECTION`: faculty collection (default: "users")
/// - `FIRESTORE_API_KEY`: web API key appended to document requests
/// - `FIRESTORE_BASE_URL`: endpoint override, e.g. a local emulator
///
/// # Errors
/// Returns an error when `FIRESTORE_PROJECT_ID` is unset or blank.
pub fn config_from_env() -> anyhow::Result<CoreConfig> {
    let project_id = std::env::var("FIRESTORE_PROJECT_ID")
        .map_err(|_| anyhow::anyhow!("FIRESTORE_PROJECT_ID must be set"))?;

    let cfg = CoreConfig::new(
        project_id,
        std::env::var("FIRESTORE_DATABASE").ok(),
        std::env::var("FIRESTORE_COLLECTION").ok(),
        std::env::var("FIRESTORE_API_KEY").ok(),
        std::env::var("FIRESTORE_BASE_URL").ok(),
    )?;
    Ok(cfg)
}

/// Build the full application router, Swagger UI and CORS included.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/fetch/:uid", get(fetch_record))
        .route("/api/generate/:uid", get(generate_form))
        .merge(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Map a service failure onto an HTTP status and JSON error body.
fn error_response(context: &str, err: pbas_core::AppraisalError) -> (StatusCode, Json<ErrorRes>) {
    use pbas_core::AppraisalError;

    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        match err {
            AppraisalError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppraisalError::Firestore(_) => StatusCode::BAD_GATEWAY,
            AppraisalError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    };
    tracing::error!("{context} error: {err:?}");
    (
        status,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancer probes.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "PBAS form service is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/api/fetch/{uid}",
    params(("uid" = String, Path, description = "Faculty document id")),
    responses(
        (status = 200, description = "Mapped appraisal record", body = AppraisalRecord),
        (status = 400, description = "Blank uid", body = ErrorRes),
        (status = 404, description = "No document for this uid", body = ErrorRes),
        (status = 502, description = "Upstream document store failure", body = ErrorRes)
    )
)]
/// Fetch one faculty document and return the mapped canonical record as JSON.
///
/// Useful for previewing what the generated form will contain, and as the
/// data source for non-DOCX clients.
#[axum::debug_handler]
async fn fetch_record(
    State(state): State<AppState>,
    AxumPath(uid): AxumPath<String>,
) -> Result<Json<AppraisalRecord>, (StatusCode, Json<ErrorRes>)> {
    match state.service.fetch_record(&uid).await {
        Ok(record) => Ok(Json(record)),
        Err(e) => Err(error_response("Fetch record", e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/generate/{uid}",
    params(("uid" = String, Path, description = "Faculty document id")),
    responses(
        (
            status = 200,
            description = "Filled PBAS form as a .docx attachment",
            content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            body = Vec<u8>
        ),
        (status = 400, description = "Blank uid", body = ErrorRes),
        (status = 404, description = "No document for this uid", body = ErrorRes),
        (status = 500, description = "Document rendering failure", body = ErrorRes),
        (status = 502, description = "Upstream document store failure", body = ErrorRes)
    )
)]
/// Generate the filled appraisal form for one faculty member.
///
/// Returns the document as a download attachment named `PBAS_{uid}.docx`.
#[axum::debug_handler]
async fn generate_form(
    State(state): State<AppState>,
    AxumPath(uid): AxumPath<String>,
) -> Result<([(HeaderName, String); 2], Vec<u8>), (StatusCode, Json<ErrorRes>)> {
    let record = match state.service.fetch_record(&uid).await {
        Ok(record) => record,
        Err(e) => return Err(error_response("Generate form", e)),
    };

    let bytes = match pbas_docx::render(&record) {
        Ok(bytes) => bytes,
        Err(e) => {
            return Err(error_response(
                "Generate form",
                pbas_core::AppraisalError::Render(e.to_string()),
            ));
        }
    };

    let headers = [
        (CONTENT_TYPE, pbas_docx::DOCX_MIME.to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"PBAS_{uid}.docx\""),
        ),
    ];
    Ok((headers, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use firestore::FirestoreError;
    use pbas_core::AppraisalError;

    #[test]
    fn missing_document_maps_to_not_found() {
        let err = AppraisalError::Firestore(FirestoreError::DocumentNotFound("abc".into()));
        let (status, _) = error_response("test", err);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn blank_uid_maps_to_bad_request() {
        let err = AppraisalError::InvalidInput("uid cannot be empty".into());
        let (status, _) = error_response("test", err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_status_maps_to_bad_gateway() {
        let err = AppraisalError::Firestore(FirestoreError::Status {
            id: "abc".into(),
            status: 500,
        });
        let (status, _) = error_response("test", err);
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn render_failure_maps_to_internal_error() {
        let err = AppraisalError::Render("pack failed".into());
        let (status, _) = error_response("test", err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
