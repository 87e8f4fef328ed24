//! Ports - interfaces the application depends on, implemented by adapters.

mod audit_log;
mod content_extractor;
mod diagram_editor;
mod document_validator;
mod file_picker;
mod key_value_store;
mod save_channel;
mod shell_host;

pub use audit_log::{AuditError, AuditLog, SaveAuditEntry};
pub use content_extractor::ContentExtractor;
pub use diagram_editor::{DiagramEditor, EditorError};
pub use document_validator::{DocumentValidationError, DocumentValidator};
pub use file_picker::{FilePicker, PickOutcome, PickerError};
pub use key_value_store::{KeyValueStore, StoreError};
pub use save_channel::{ArtifactData, ChannelError, SaveArtifact, SaveChannel, SavedVia};
pub use shell_host::{ShellError, ShellHost};
