//! Diagram value objects: document text, save formats, snapshots, history.

mod document;
mod format;
mod history;
mod snapshot;

pub use document::{DiagramDocument, EMPTY_DIAGRAM_XML, ROOT_MARKER};
pub use format::{SaveFormat, UnsupportedFormat};
pub use history::SnapshotHistory;
pub use snapshot::{ExportPayload, Snapshot};
