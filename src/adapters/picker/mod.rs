//! File picker adapters.

use async_trait::async_trait;

use crate::ports::{FilePicker, PickOutcome, PickerError};

/// Stub for hosts without a native save-file picker.
#[derive(Debug, Clone, Default)]
pub struct UnavailableFilePicker;

impl UnavailableFilePicker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FilePicker for UnavailableFilePicker {
    async fn available(&self) -> bool {
        false
    }

    async fn save_with_prompt(
        &self,
        _bytes: &[u8],
        _filename: &str,
        _mime_type: &str,
    ) -> Result<PickOutcome, PickerError> {
        Err(PickerError::Unavailable("no picker in this host".to_string()))
    }
}
