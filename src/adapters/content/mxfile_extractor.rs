//! Extracts the embedded document from a combined export payload.
//!
//! Combined payloads are either plain XML containing an `<mxfile>` element or
//! a `data:` URL whose base64 body embeds one (e.g. an image with the model
//! stored alongside the pixels). Image-only payloads yield nothing.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::diagram::ExportPayload;
use crate::ports::ContentExtractor;

const OPEN: &[u8] = b"<mxfile";
const CLOSE: &[u8] = b"</mxfile>";

#[derive(Debug, Clone, Default)]
pub struct MxfileExtractor;

impl MxfileExtractor {
    pub fn new() -> Self {
        Self
    }

    fn find_mxfile(bytes: &[u8]) -> Option<String> {
        let start = bytes.windows(OPEN.len()).position(|w| w == OPEN)?;
        let close = bytes[start..]
            .windows(CLOSE.len())
            .position(|w| w == CLOSE)?;
        let end = start + close + CLOSE.len();
        String::from_utf8(bytes[start..end].to_vec()).ok()
    }
}

impl ContentExtractor for MxfileExtractor {
    fn extract(&self, payload: &ExportPayload) -> Option<String> {
        if let Some(body) = payload.data_url_body() {
            let decoded = STANDARD.decode(body.trim()).ok()?;
            return Self::find_mxfile(&decoded);
        }
        Self::find_mxfile(payload.as_str().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_plain_xml_payloads() {
        let extractor = MxfileExtractor::new();
        let payload = ExportPayload::new("<mxfile><diagram /></mxfile>");
        assert_eq!(
            extractor.extract(&payload).as_deref(),
            Some("<mxfile><diagram /></mxfile>")
        );
    }

    #[test]
    fn extracts_the_embedded_span_from_surrounding_content() {
        let extractor = MxfileExtractor::new();
        let payload = ExportPayload::new("<svg data-model='x'><mxfile>m</mxfile></svg>");
        assert_eq!(extractor.extract(&payload).as_deref(), Some("<mxfile>m</mxfile>"));
    }

    #[test]
    fn extracts_from_a_base64_data_url() {
        let extractor = MxfileExtractor::new();
        let embedded = "PNGJUNK<mxfile>embedded</mxfile>TRAILER";
        let payload = ExportPayload::new(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(embedded.as_bytes())
        ));
        assert_eq!(
            extractor.extract(&payload).as_deref(),
            Some("<mxfile>embedded</mxfile>")
        );
    }

    #[test]
    fn image_only_payloads_yield_nothing() {
        let extractor = MxfileExtractor::new();
        let payload = ExportPayload::new(format!(
            "data:image/png;base64,{}",
            STANDARD.encode([0x89u8, 0x50, 0x4e, 0x47])
        ));
        assert_eq!(extractor.extract(&payload), None);
    }

    #[test]
    fn invalid_base64_yields_nothing() {
        let extractor = MxfileExtractor::new();
        let payload = ExportPayload::new("data:image/png;base64,???");
        assert_eq!(extractor.extract(&payload), None);
    }
}
