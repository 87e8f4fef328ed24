//! No-op audit log for hosts without an audit endpoint and for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{AuditError, AuditLog, SaveAuditEntry};

#[derive(Debug, Default)]
pub struct NoopAuditLog {
    entries: Mutex<Vec<SaveAuditEntry>>,
}

impl NoopAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries recorded so far (useful for tests).
    pub fn entries(&self) -> Vec<SaveAuditEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLog for NoopAuditLog {
    async fn record(&self, entry: SaveAuditEntry) -> Result<(), AuditError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }
}
