//! Save formats supported by the export/save pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output formats a diagram can be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveFormat {
    /// Native diagram document (XML with the embedded model).
    Xml,
    /// Raster image export.
    Png,
    /// Vector image export.
    Svg,
}

impl SaveFormat {
    /// Get the MIME content type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            SaveFormat::Xml => "application/xml; charset=utf-8",
            SaveFormat::Png => "image/png",
            SaveFormat::Svg => "image/svg+xml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Xml => "xml",
            SaveFormat::Png => "png",
            SaveFormat::Svg => "svg",
        }
    }

    /// Image-only outputs carry no embedded document text.
    pub fn is_image(&self) -> bool {
        matches!(self, SaveFormat::Png | SaveFormat::Svg)
    }

    /// Whether exported payloads for this format arrive base64-encoded.
    pub fn is_base64_encoded(&self) -> bool {
        matches!(self, SaveFormat::Png)
    }
}

impl std::fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveFormat::Xml => write!(f, "xml"),
            SaveFormat::Png => write!(f, "png"),
            SaveFormat::Svg => write!(f, "svg"),
        }
    }
}

/// Error for unrecognized format names.
#[derive(Debug, Clone, Error)]
#[error("Unsupported save format: {0}")]
pub struct UnsupportedFormat(pub String);

impl std::str::FromStr for SaveFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" | "drawio" => Ok(SaveFormat::Xml),
            "png" => Ok(SaveFormat::Png),
            "svg" => Ok(SaveFormat::Svg),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}
