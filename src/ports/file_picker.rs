//! FilePicker port - native save-file-picker capability.

use async_trait::async_trait;

/// Result of a picker prompt that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// The user chose a destination and the bytes were written.
    Saved,
    /// The user dismissed the prompt.
    Cancelled,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PickerError {
    #[error("Save picker unavailable: {0}")]
    Unavailable(String),

    #[error("Save picker prompt failed: {0}")]
    PromptFailed(String),

    #[error("Writing picked file failed: {0}")]
    WriteFailed(String),
}

/// Port for the optional native save-file picker.
#[async_trait]
pub trait FilePicker: Send + Sync {
    /// Whether the picker capability exists in this host.
    async fn available(&self) -> bool;

    /// Prompt the user for a destination and write the bytes there.
    async fn save_with_prompt(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<PickOutcome, PickerError>;
}
