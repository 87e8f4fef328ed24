//! Structural XML validator with root-marker auto-fix.
//!
//! Runs a full structural pass over the input with quick-xml; well-formed
//! content that lacks the document-root marker is wrapped in one rather than
//! rejected.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::diagram::DiagramDocument;
use crate::ports::{DocumentValidationError, DocumentValidator};

#[derive(Debug, Clone, Default)]
pub struct XmlDocumentValidator;

impl XmlDocumentValidator {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentValidator for XmlDocumentValidator {
    fn validate(&self, text: &str) -> Result<String, DocumentValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DocumentValidationError::Empty);
        }

        let mut reader = Reader::from_str(trimmed);
        let mut saw_element = false;
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(Event::Start(_)) | Ok(Event::Empty(_)) => saw_element = true,
                Ok(_) => {}
                Err(err) => {
                    return Err(DocumentValidationError::malformed(format!(
                        "XML error at position {}: {}",
                        reader.buffer_position(),
                        err
                    )));
                }
            }
        }
        if !saw_element {
            return Err(DocumentValidationError::malformed(
                "document contains no XML elements",
            ));
        }

        Ok(DiagramDocument::new(trimmed)
            .ensure_root_marker()
            .into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_document_unchanged() {
        let validator = XmlDocumentValidator::new();
        let xml = "<mxfile><diagram id=\"a\" /></mxfile>";
        assert_eq!(validator.validate(xml).unwrap(), xml);
    }

    #[test]
    fn wraps_rootless_but_well_formed_content() {
        let validator = XmlDocumentValidator::new();
        let fixed = validator.validate("<mxGraphModel><root /></mxGraphModel>").unwrap();
        assert!(fixed.starts_with("<mxfile"));
        assert!(fixed.contains("<mxGraphModel><root /></mxGraphModel>"));
    }

    #[test]
    fn rejects_empty_input() {
        let validator = XmlDocumentValidator::new();
        assert!(matches!(
            validator.validate("   "),
            Err(DocumentValidationError::Empty)
        ));
    }

    #[test]
    fn rejects_malformed_xml_with_a_description() {
        let validator = XmlDocumentValidator::new();
        let err = validator.validate("<mxfile><a></b></mxfile>").unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn rejects_text_without_elements() {
        let validator = XmlDocumentValidator::new();
        assert!(validator.validate("just some prose").is_err());
    }
}
