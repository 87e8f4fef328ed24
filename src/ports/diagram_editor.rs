//! DiagramEditor port - commands accepted by the embedded editor.
//!
//! The editor is an external collaborator: it accepts a load command with
//! document content and an export command with a requested format, and later
//! emits exactly one exported-content event per export request. That event is
//! delivered out-of-band to `ExportCorrelator::on_export_completed`.

use async_trait::async_trait;

use crate::domain::diagram::SaveFormat;

/// Errors from issuing editor commands.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EditorError {
    #[error("Editor is not ready to accept commands")]
    NotReady,

    #[error("Editor command failed: {0}")]
    CommandFailed(String),
}

impl EditorError {
    pub fn command_failed(reason: impl Into<String>) -> Self {
        EditorError::CommandFailed(reason.into())
    }
}

/// Port for driving the embedded diagram editor.
#[async_trait]
pub trait DiagramEditor: Send + Sync {
    /// Load document content into the editor, replacing what it shows.
    async fn load(&self, xml: &str) -> Result<(), EditorError>;

    /// Ask the editor to export its current content in the given format.
    ///
    /// Completion arrives asynchronously as a single exported-content event;
    /// this call only issues the command.
    async fn request_export(&self, format: SaveFormat) -> Result<(), EditorError>;
}
