//! Desktop-shell save channel.
//!
//! The shell expects pre-encoded data: base64 for raster images, decoded text
//! otherwise. The pipeline's artifact already carries that encoding, so the
//! content passes straight through.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{ArtifactData, ChannelError, SaveArtifact, SaveChannel, SavedVia, ShellHost};

pub struct ShellChannel {
    host: Arc<dyn ShellHost>,
}

impl ShellChannel {
    pub fn new(host: Arc<dyn ShellHost>) -> Self {
        Self { host }
    }
}

#[async_trait]
impl SaveChannel for ShellChannel {
    fn name(&self) -> &'static str {
        "shell"
    }

    async fn is_available(&self) -> bool {
        self.host.available().await
    }

    async fn attempt(&self, artifact: &SaveArtifact) -> Result<SavedVia, ChannelError> {
        let data = match &artifact.data {
            ArtifactData::Text(text) => text.as_str(),
            ArtifactData::Base64(encoded) => encoded.as_str(),
        };
        match self
            .host
            .save_file(data, &artifact.filename, artifact.format)
            .await
        {
            Ok(true) => Ok(SavedVia::Shell),
            Ok(false) => Err(ChannelError::failed("shell host declined the save")),
            Err(err) => Err(ChannelError::failed(err.to_string())),
        }
    }
}
