//! Document validation adapters.

mod xml_validator;

pub use xml_validator::XmlDocumentValidator;
