//! Storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Persistence keys, thresholds, and the download directory.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Key the current document is persisted under.
    #[serde(default = "default_document_key")]
    pub document_key: String,

    /// Documents at or below this length are treated as placeholder content
    /// and never persisted.
    #[serde(default = "default_min_persist_len")]
    pub min_persist_len: usize,

    /// Maximum number of snapshots retained in history.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Directory the fallback download channel writes into.
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.document_key.trim().is_empty() {
            return Err(ValidationError::EmptyDocumentKey);
        }
        if self.history_capacity == 0 {
            return Err(ValidationError::InvalidHistoryCapacity);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            document_key: default_document_key(),
            min_persist_len: default_min_persist_len(),
            history_capacity: default_history_capacity(),
            download_dir: default_download_dir(),
        }
    }
}

fn default_document_key() -> String {
    "diagram.workbench.document".to_string()
}

fn default_min_persist_len() -> usize {
    300
}

fn default_history_capacity() -> usize {
    20
}

fn default_download_dir() -> String {
    "./downloads".to_string()
}
