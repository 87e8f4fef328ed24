//! KeyValueStore port - simple durable get/set by string key.

use async_trait::async_trait;

/// Errors that can occur during storage operations.
///
/// Per module policy these never cross the module boundary: callers log and
/// swallow them, leaving in-memory state untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Storage read failed: {0}")]
    ReadFailed(String),

    #[error("Storage write failed: {0}")]
    WriteFailed(String),
}

impl StoreError {
    pub fn read_failed(reason: impl Into<String>) -> Self {
        StoreError::ReadFailed(reason.into())
    }

    pub fn write_failed(reason: impl Into<String>) -> Self {
        StoreError::WriteFailed(reason.into())
    }
}

/// Port for persisted key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, overwriting any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
