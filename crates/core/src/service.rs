//! Appraisal record retrieval service.
//!
//! Thin orchestration over the Firestore boundary crate: fetch one faculty
//! document, decode it, and map it into the canonical record. Request-scoped
//! and stateless; a fresh record is produced per call and never cached.

use crate::config::CoreConfig;
use crate::mapper::map_document;
use crate::record::AppraisalRecord;
use crate::{AppraisalError, AppraisalResult};
use firestore::FirestoreClient;
use std::sync::Arc;

/// Service that turns a faculty uid into a canonical appraisal record.
#[derive(Clone, Debug)]
pub struct AppraisalService {
    cfg: Arc<CoreConfig>,
    client: FirestoreClient,
}

impl AppraisalService {
    /// Build a service (and its document client) from resolved configuration.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        let client = match cfg.base_url() {
            Some(base) => FirestoreClient::with_base_url(
                base.to_string(),
                cfg.project_id().to_string(),
                cfg.database().to_string(),
                cfg.api_key().map(str::to_string),
            ),
            None => FirestoreClient::new(
                cfg.project_id().to_string(),
                cfg.database().to_string(),
                cfg.api_key().map(str::to_string),
            ),
        };

        Self { cfg, client }
    }

    /// Fetch, decode and map one faculty document.
    ///
    /// The returned record is always fully keyed; sparse documents simply
    /// produce many defaulted fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppraisalError::InvalidInput`] for a blank uid, and
    /// [`AppraisalError::Firestore`] when the upstream fetch fails or the
    /// document is absent. Mapping itself never fails.
    pub async fn fetch_record(&self, uid: &str) -> AppraisalResult<AppraisalRecord> {
        if uid.trim().is_empty() {
            return Err(AppraisalError::InvalidInput("uid cannot be empty".into()));
        }

        let document = self
            .client
            .fetch_document(self.cfg.collection(), uid)
            .await?;
        tracing::debug!(uid, fields = document.len(), "decoded appraisal document");

        Ok(map_document(&document))
    }
}
