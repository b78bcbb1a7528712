//! Firestore wire/boundary support.
//!
//! This crate is responsible for translating between the Firestore REST
//! tagged-union value encoding and plain `serde_json` value trees, and for
//! fetching single documents over the REST endpoint.
//!
//! Appraisal meaning lives in `pbas-core`. This crate handles wire formats
//! and transport only.

pub mod client;
pub mod value;

// Re-export facades
pub use client::FirestoreClient;
pub use value::{decode_fields, DecodedDocument, TaggedValue};

/// Errors returned by the `firestore` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FirestoreError {
    #[error("document '{0}' not found")]
    DocumentNotFound(String),

    #[error("document store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("document store returned status {status} for '{id}'")]
    Status { id: String, status: u16 },

    #[error("failed to parse document store response: {0}")]
    InvalidResponse(String),
}

/// Type alias for Results that can fail with a [`FirestoreError`].
pub type FirestoreResult<T> = Result<T, FirestoreError>;
