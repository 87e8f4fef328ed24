//! Audit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Save-audit endpoint configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Endpoint save events are POSTed to. Absent means auditing is off.
    pub endpoint: Option<String>,
}

impl AuditConfig {
    pub fn enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ValidationError::InvalidAuditEndpoint);
            }
        }
        Ok(())
    }
}
