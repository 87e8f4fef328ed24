//! SaveChannel port - one destination a save artifact can be written to.
//!
//! The save pipeline holds an ordered list of channels and tries them in
//! preference order; each attempt is isolated, so a failing or unavailable
//! channel simply falls through to the next one.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::diagram::SaveFormat;

/// Which destination channel ultimately handled a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedVia {
    Shell,
    Picker,
    Download,
}

impl std::fmt::Display for SavedVia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SavedVia::Shell => write!(f, "shell"),
            SavedVia::Picker => write!(f, "picker"),
            SavedVia::Download => write!(f, "download"),
        }
    }
}

/// Save content in the encoding it left the pipeline with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactData {
    /// Decoded text (native documents, SVG).
    Text(String),
    /// Base64-encoded bytes (raster images).
    Base64(String),
}

/// One materialized save: final content plus naming/typing metadata.
#[derive(Debug, Clone)]
pub struct SaveArtifact {
    pub filename: String,
    pub format: SaveFormat,
    pub data: ArtifactData,
}

impl SaveArtifact {
    pub fn text(filename: impl Into<String>, format: SaveFormat, text: String) -> Self {
        Self {
            filename: filename.into(),
            format,
            data: ArtifactData::Text(text),
        }
    }

    pub fn base64(filename: impl Into<String>, format: SaveFormat, encoded: String) -> Self {
        Self {
            filename: filename.into(),
            format,
            data: ArtifactData::Base64(encoded),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Decode the artifact to raw bytes for channels that write files.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ChannelError> {
        match &self.data {
            ArtifactData::Text(text) => Ok(text.as_bytes().to_vec()),
            ArtifactData::Base64(encoded) => STANDARD
                .decode(encoded.trim())
                .map_err(|e| ChannelError::failed(format!("invalid base64 payload: {e}"))),
        }
    }
}

/// Outcome of one channel attempt that did not succeed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChannelError {
    /// The channel's capability is absent in this host.
    #[error("Save channel unavailable")]
    Unavailable,

    /// The user dismissed a prompt; benign, falls through to the next channel.
    #[error("Save cancelled by user")]
    Cancelled,

    #[error("Save channel failed: {0}")]
    Failed(String),
}

impl ChannelError {
    pub fn failed(reason: impl Into<String>) -> Self {
        ChannelError::Failed(reason.into())
    }
}

/// Port for a single save destination.
#[async_trait]
pub trait SaveChannel: Send + Sync {
    /// Short channel name for logging.
    fn name(&self) -> &'static str;

    /// Whether this channel's capability exists in the current host.
    async fn is_available(&self) -> bool;

    /// Try to write the artifact to this destination.
    async fn attempt(&self, artifact: &SaveArtifact) -> Result<SavedVia, ChannelError>;
}
