//! ShellHost port - desktop-shell save capability.
//!
//! Present only when the application runs inside the desktop shell. The shell
//! expects pre-encoded data: base64 for raster images, decoded text otherwise.

use async_trait::async_trait;

use crate::domain::diagram::SaveFormat;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ShellError {
    #[error("Shell save failed: {0}")]
    SaveFailed(String),
}

impl ShellError {
    pub fn save_failed(reason: impl Into<String>) -> Self {
        ShellError::SaveFailed(reason.into())
    }
}

/// Port for the optional desktop-shell host.
#[async_trait]
pub trait ShellHost: Send + Sync {
    /// Whether the shell capability exists at all.
    async fn available(&self) -> bool;

    /// Invoke the shell's native save call. `Ok(false)` means the shell
    /// declined the save without an error.
    async fn save_file(
        &self,
        data: &str,
        filename: &str,
        format: SaveFormat,
    ) -> Result<bool, ShellError>;
}
