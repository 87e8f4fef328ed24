//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Export timeout must be non-zero")]
    InvalidExportTimeout,

    #[error("Persistence debounce window must be non-zero")]
    InvalidDebounceWindow,

    #[error("History capacity must be non-zero")]
    InvalidHistoryCapacity,

    #[error("Document storage key must not be empty")]
    EmptyDocumentKey,

    #[error("Audit endpoint must be an http(s) URL")]
    InvalidAuditEndpoint,
}
