//! AuditLog port - fire-and-forget record of file-save events.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::diagram::SaveFormat;

/// One save event as posted to the audit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAuditEntry {
    pub filename: String,
    pub format: SaveFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
}

impl SaveAuditEntry {
    pub fn new(filename: impl Into<String>, format: SaveFormat, session_id: Option<Uuid>) -> Self {
        Self {
            filename: filename.into(),
            format,
            session_id,
        }
    }
}

/// Errors from recording an audit entry. Callers log and swallow these;
/// auditing never aborts a save.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuditError {
    #[error("Audit request failed: {0}")]
    RequestFailed(String),

    #[error("Audit endpoint rejected entry with status {0}")]
    Rejected(u16),
}

/// Port for remote audit logging of save events.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, entry: SaveAuditEntry) -> Result<(), AuditError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn AuditLog) {}

    #[test]
    fn entry_serializes_without_absent_session_id() {
        let entry = SaveAuditEntry::new("diagram.xml", SaveFormat::Xml, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"filename\":\"diagram.xml\""));
        assert!(json.contains("\"format\":\"xml\""));
        assert!(!json.contains("session_id"));
    }

    #[test]
    fn entry_serializes_session_id_when_present() {
        let id = Uuid::new_v4();
        let entry = SaveAuditEntry::new("d.png", SaveFormat::Png, Some(id));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(&id.to_string()));
    }
}
