//! File-backed key-value store.
//!
//! One file per key under a base directory. Keys are sanitized into
//! filesystem-safe names, so distinct keys must stay distinct after
//! sanitization.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();
        self.base_path.join(safe)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::read_failed(err.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|err| StoreError::write_failed(err.to_string()))?;
        fs::write(self.key_path(key), value)
            .await
            .map_err(|err| StoreError::write_failed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("diagram.workbench.document", "<mxfile />").await.unwrap();
        let value = store.get("diagram.workbench.document").await.unwrap();
        assert_eq!(value.as_deref(), Some("<mxfile />"));
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_are_sanitized_into_safe_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set("weird/key name", "v").await.unwrap();
        assert_eq!(store.get("weird/key name").await.unwrap().as_deref(), Some("v"));
        assert!(dir.path().join("weird_key_name").exists());
    }
}
