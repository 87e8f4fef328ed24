//! Native save-file-picker channel.

use std::sync::Arc;

use async_trait::async_trait;

use crate::ports::{
    ChannelError, FilePicker, PickOutcome, SaveArtifact, SaveChannel, SavedVia,
};

pub struct PickerChannel {
    picker: Arc<dyn FilePicker>,
}

impl PickerChannel {
    pub fn new(picker: Arc<dyn FilePicker>) -> Self {
        Self { picker }
    }
}

#[async_trait]
impl SaveChannel for PickerChannel {
    fn name(&self) -> &'static str {
        "picker"
    }

    async fn is_available(&self) -> bool {
        self.picker.available().await
    }

    async fn attempt(&self, artifact: &SaveArtifact) -> Result<SavedVia, ChannelError> {
        let bytes = artifact.to_bytes()?;
        match self
            .picker
            .save_with_prompt(&bytes, &artifact.filename, artifact.mime_type())
            .await
        {
            Ok(PickOutcome::Saved) => Ok(SavedVia::Picker),
            // User dismissal is benign; the pipeline falls through quietly.
            Ok(PickOutcome::Cancelled) => Err(ChannelError::Cancelled),
            Err(err) => Err(ChannelError::failed(err.to_string())),
        }
    }
}
