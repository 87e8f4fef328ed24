//! DiagramDocument value object - the full text of the current diagram.
//!
//! The document is always the editor's native XML serialization and is
//! replaced wholesale on load, export, or clear - never patched in place.
//! A canonical empty-diagram template stands in for "no diagram", so the
//! document is never the empty string after initialization.

use std::fmt;

use once_cell::sync::Lazy;

/// The marker every complete diagram document opens with.
pub const ROOT_MARKER: &str = "<mxfile";

/// Canonical template used for the "no diagram" state.
pub const EMPTY_DIAGRAM_XML: &str = "<mxfile host=\"workbench\"><diagram id=\"blank\" name=\"Page-1\"><mxGraphModel><root><mxCell id=\"0\" /><mxCell id=\"1\" parent=\"0\" /></root></mxGraphModel></diagram></mxfile>";

static EMPTY_TEMPLATE: Lazy<DiagramDocument> = Lazy::new(|| DiagramDocument {
    text: EMPTY_DIAGRAM_XML.to_string(),
});

/// The current diagram's full serialized text.
///
/// Blank input collapses to the empty-diagram template, which keeps the
/// "never empty after initialization" invariant without an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramDocument {
    text: String,
}

impl DiagramDocument {
    /// Create a document from raw text. Blank text yields the empty template.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::empty()
        } else {
            Self { text }
        }
    }

    /// The canonical empty-diagram document.
    pub fn empty() -> Self {
        EMPTY_TEMPLATE.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether this document is the canonical empty template.
    pub fn is_empty_template(&self) -> bool {
        self.text == EMPTY_DIAGRAM_XML
    }

    /// Whether the text already carries the document-root marker.
    pub fn has_root_marker(&self) -> bool {
        self.text.contains(ROOT_MARKER)
    }

    /// Return a document guaranteed to carry the root marker, wrapping bare
    /// content in a root element when it lacks one.
    pub fn ensure_root_marker(self) -> Self {
        if self.has_root_marker() {
            self
        } else {
            Self {
                text: format!(
                    "<mxfile host=\"workbench\"><diagram id=\"imported\" name=\"Page-1\">{}</diagram></mxfile>",
                    self.text
                ),
            }
        }
    }

    /// Whether the document is long enough to be worth persisting.
    ///
    /// Short documents are assumed to be placeholder/template content and are
    /// skipped by the persistence layer.
    pub fn is_meaningful(&self, min_len: usize) -> bool {
        self.text.len() > min_len
    }
}

impl Default for DiagramDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for DiagramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_collapses_to_empty_template() {
        assert!(DiagramDocument::new("").is_empty_template());
        assert!(DiagramDocument::new("   \n\t ").is_empty_template());
        assert!(!DiagramDocument::new("<mxfile></mxfile>").is_empty_template());
    }

    #[test]
    fn document_is_never_empty_after_construction() {
        assert!(!DiagramDocument::new("").is_empty());
        assert!(!DiagramDocument::default().is_empty());
    }

    #[test]
    fn ensure_root_marker_wraps_bare_content() {
        let doc = DiagramDocument::new("<mxGraphModel><root /></mxGraphModel>").ensure_root_marker();
        assert!(doc.has_root_marker());
        assert!(doc.as_str().contains("<mxGraphModel><root /></mxGraphModel>"));
    }

    #[test]
    fn ensure_root_marker_is_a_noop_for_complete_documents() {
        let original = DiagramDocument::new("<mxfile><diagram /></mxfile>");
        let ensured = original.clone().ensure_root_marker();
        assert_eq!(original, ensured);
    }

    #[test]
    fn meaningful_gate_uses_strict_threshold() {
        let doc = DiagramDocument::new("x".repeat(300));
        assert!(!doc.is_meaningful(300));
        let doc = DiagramDocument::new("x".repeat(301));
        assert!(doc.is_meaningful(300));
    }
}
