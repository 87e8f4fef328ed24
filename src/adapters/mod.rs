//! Adapters - concrete implementations of the ports.

pub mod audit;
pub mod channels;
pub mod content;
pub mod editor;
pub mod picker;
pub mod shell;
pub mod storage;
pub mod validation;

pub use audit::{HttpAuditLog, NoopAuditLog};
pub use channels::{DownloadChannel, PickerChannel, ShellChannel};
pub use content::MxfileExtractor;
pub use editor::MockEditor;
pub use picker::UnavailableFilePicker;
pub use shell::UnavailableShellHost;
pub use storage::{FileStore, InMemoryStore};
pub use validation::XmlDocumentValidator;
