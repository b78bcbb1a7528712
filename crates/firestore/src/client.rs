//! Minimal Firestore REST document client.
//!
//! Fetches single documents from the
//! `projects/{project}/databases/{database}/documents/{collection}/{id}`
//! REST endpoint and decodes their tagged-union field encoding into plain
//! value trees. Fetch failures are surfaced as structured errors and never
//! retried; everything past a successful fetch is handled permissively by
//! the decoder.

use crate::value::{decode_fields, DecodedDocument};
use crate::{FirestoreError, FirestoreResult};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Default public Firestore REST endpoint.
const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";

/// Wire representation of a Firestore REST document response.
///
/// Only the `fields` body is of interest; the resource name and timestamps
/// are accepted and ignored.
#[derive(Debug, Deserialize)]
struct DocumentWire {
    #[serde(default)]
    fields: Option<Map<String, Value>>,
}

/// Client for fetching single documents from a Firestore project.
#[derive(Clone, Debug)]
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
    database: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// Create a client against the public Firestore REST endpoint.
    pub fn new(project_id: String, database: String, api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), project_id, database, api_key)
    }

    /// Create a client against an explicit base URL.
    ///
    /// Used by tests and local emulators.
    pub fn with_base_url(
        base_url: String,
        project_id: String,
        database: String,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            database,
            api_key,
        }
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}/{}",
            self.base_url, self.project_id, self.database, collection, id
        )
    }

    /// Fetch one document and decode its fields into a plain document body.
    ///
    /// # Errors
    ///
    /// Returns [`FirestoreError`] if:
    /// - the endpoint responds 404, or responds 200 without a `fields` body
    ///   (`DocumentNotFound`),
    /// - the endpoint responds with any other non-success status (`Status`),
    /// - the request fails at the transport level (`Transport`), or
    /// - the response body is not valid JSON (`InvalidResponse`).
    pub async fn fetch_document(
        &self,
        collection: &str,
        id: &str,
    ) -> FirestoreResult<DecodedDocument> {
        let mut request = self.http.get(self.document_url(collection, id));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        tracing::debug!(collection, id, "fetching document");
        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FirestoreError::DocumentNotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(FirestoreError::Status {
                id: id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let wire: DocumentWire = serde_json::from_str(&body)
            .map_err(|e| FirestoreError::InvalidResponse(e.to_string()))?;

        match wire.fields {
            Some(fields) => Ok(decode_fields(&fields)),
            None => Err(FirestoreError::DocumentNotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_url_includes_project_database_and_path() {
        let client = FirestoreClient::with_base_url(
            "http://localhost:8080/".to_string(),
            "shikshak-sarthi".to_string(),
            "(default)".to_string(),
            None,
        );

        assert_eq!(
            client.document_url("users", "abc123"),
            "http://localhost:8080/v1/projects/shikshak-sarthi/databases/(default)/documents/users/abc123"
        );
    }

    #[test]
    fn response_without_fields_is_not_found() {
        let wire: DocumentWire =
            serde_json::from_str(r#"{"name": "projects/p/databases/d/documents/users/x"}"#)
                .expect("parse document wire");
        assert!(wire.fields.is_none());
    }
}
