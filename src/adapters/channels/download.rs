//! Download fallback channel.
//!
//! Always available: materializes the artifact's bytes into a downloads
//! directory. Download completion cannot be observed, so a successful write
//! is treated as a nominal save.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::config::StorageConfig;
use crate::ports::{ChannelError, SaveArtifact, SaveChannel, SavedVia};

pub struct DownloadChannel {
    dir: PathBuf,
}

impl DownloadChannel {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Build the channel over the configured download directory.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.download_dir)
    }

    fn target_path(&self, filename: &str) -> PathBuf {
        let safe: String = filename
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(safe)
    }
}

#[async_trait]
impl SaveChannel for DownloadChannel {
    fn name(&self) -> &'static str {
        "download"
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn attempt(&self, artifact: &SaveArtifact) -> Result<SavedVia, ChannelError> {
        let bytes = artifact.to_bytes()?;
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| ChannelError::failed(err.to_string()))?;
        fs::write(self.target_path(&artifact.filename), bytes)
            .await
            .map_err(|err| ChannelError::failed(err.to_string()))?;
        Ok(SavedVia::Download)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::SaveFormat;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    #[tokio::test]
    async fn writes_text_artifacts_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let channel = DownloadChannel::new(dir.path());

        let artifact = SaveArtifact::text("diagram.xml", SaveFormat::Xml, "<mxfile />".to_string());
        assert_eq!(channel.attempt(&artifact).await.unwrap(), SavedVia::Download);

        let written = std::fs::read_to_string(dir.path().join("diagram.xml")).unwrap();
        assert_eq!(written, "<mxfile />");
    }

    #[tokio::test]
    async fn decodes_base64_artifacts_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let channel = DownloadChannel::new(dir.path());

        let artifact = SaveArtifact::base64(
            "diagram.png",
            SaveFormat::Png,
            STANDARD.encode([0x89u8, 0x50, 0x4e, 0x47]),
        );
        channel.attempt(&artifact).await.unwrap();

        let written = std::fs::read(dir.path().join("diagram.png")).unwrap();
        assert_eq!(written, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn from_config_uses_the_configured_directory() {
        let channel = DownloadChannel::from_config(&StorageConfig::default());
        assert_eq!(channel.dir, PathBuf::from("./downloads"));
    }

    #[tokio::test]
    async fn filenames_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let channel = DownloadChannel::new(dir.path());

        let artifact = SaveArtifact::text("../escape.xml", SaveFormat::Xml, "x".to_string());
        channel.attempt(&artifact).await.unwrap();
        assert!(dir.path().join(".._escape.xml").exists());
    }
}
