//! ContentExtractor port - pulls document text out of a combined export payload.
//!
//! Pure function collaborator. Image-only payloads (plain PNG/SVG without an
//! embedded model) yield `None`.

use crate::domain::diagram::ExportPayload;

/// Port for content-addressable extraction of the document-format text from a
/// raw export payload.
pub trait ContentExtractor: Send + Sync {
    fn extract(&self, payload: &ExportPayload) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ContentExtractor) {}
}
