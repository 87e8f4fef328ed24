//! Rendered snapshots and raw export payloads.

use chrono::{DateTime, Utc};

use super::document::DiagramDocument;

/// Raw payload emitted by the editor for one export request.
///
/// Depending on the requested format this is either plain XML or a
/// `data:` URL wrapping a base64-encoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload(String);

impl ExportPayload {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }

    /// The base64 body of a `data:` URL payload, if this is one.
    pub fn data_url_body(&self) -> Option<&str> {
        if !self.is_data_url() {
            return None;
        }
        self.0.splitn(2, ',').nth(1)
    }
}

/// A rendered image paired with the document text at the time of export.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    image: ExportPayload,
    document: DiagramDocument,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(image: ExportPayload, document: DiagramDocument) -> Self {
        Self {
            image,
            document,
            captured_at: Utc::now(),
        }
    }

    pub fn image(&self) -> &ExportPayload {
        &self.image
    }

    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
