//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! core services. Request handlers never read process-wide environment
//! variables, which keeps behaviour consistent across multi-threaded
//! runtimes and test harnesses.

use crate::{AppraisalError, AppraisalResult};

/// Firestore collection holding faculty appraisal documents.
pub const DEFAULT_COLLECTION: &str = "users";

/// Database name used by Firestore unless a project configures another.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    project_id: String,
    database: String,
    collection: String,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AppraisalError::InvalidInput`] if `project_id` is empty.
    pub fn new(
        project_id: String,
        database: Option<String>,
        collection: Option<String>,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> AppraisalResult<Self> {
        if project_id.trim().is_empty() {
            return Err(AppraisalError::InvalidInput(
                "project_id cannot be empty".into(),
            ));
        }

        Ok(Self {
            project_id,
            database: non_empty(database).unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            collection: non_empty(collection).unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
            api_key: non_empty(api_key),
            base_url: non_empty(base_url),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Base URL override for emulators and tests; `None` means the public
    /// Firestore endpoint.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_project_id() {
        let err = CoreConfig::new("  ".into(), None, None, None, None)
            .expect_err("blank project id should be rejected");
        assert!(matches!(err, AppraisalError::InvalidInput(_)));
    }

    #[test]
    fn applies_defaults_for_database_and_collection() {
        let cfg = CoreConfig::new("proj".into(), None, Some("  ".into()), None, None)
            .expect("valid config");
        assert_eq!(cfg.database(), "(default)");
        assert_eq!(cfg.collection(), "users");
        assert!(cfg.api_key().is_none());
        assert!(cfg.base_url().is_none());
    }

    #[test]
    fn keeps_explicit_overrides() {
        let cfg = CoreConfig::new(
            "proj".into(),
            Some("staging".into()),
            Some("faculty".into()),
            Some("k123".into()),
            Some("http://localhost:8080".into()),
        )
        .expect("valid config");
        assert_eq!(cfg.database(), "staging");
        assert_eq!(cfg.collection(), "faculty");
        assert_eq!(cfg.api_key(), Some("k123"));
        assert_eq!(cfg.base_url(), Some("http://localhost:8080"));
    }
}
