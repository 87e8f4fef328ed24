//! DocumentValidator port - normalizes/validates raw document text before load.
//!
//! Consumed as a pure function: input document text in, either the
//! (possibly auto-fixed) text or a descriptive error out. This is the only
//! failure in the module that surfaces to callers.

/// Validation failure with a user-presentable description.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentValidationError {
    #[error("Document is empty")]
    Empty,

    #[error("Malformed diagram document: {0}")]
    Malformed(String),
}

impl DocumentValidationError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        DocumentValidationError::Malformed(reason.into())
    }
}

/// Port for validating and auto-fixing document text.
pub trait DocumentValidator: Send + Sync {
    /// Validate `text`, returning the normalized (possibly wrapped/fixed)
    /// document on success.
    fn validate(&self, text: &str) -> Result<String, DocumentValidationError>;
}
