#[derive(Debug, thiserror::Error)]
pub enum AppraisalError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("document store error: {0}")]
    Firestore(#[from] firestore::FirestoreError),

    #[error("form rendering failed: {0}")]
    Render(String),
}

impl AppraisalError {
    /// True when the underlying cause is an absent upstream document.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppraisalError::Firestore(firestore::FirestoreError::DocumentNotFound(_))
        )
    }
}

pub type AppraisalResult<T> = std::result::Result<T, AppraisalError>;
