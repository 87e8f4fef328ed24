//! HTTP audit log adapter.
//!
//! Posts one JSON entry per file save to the configured endpoint. Callers
//! treat this as fire-and-forget: errors returned here are logged and
//! swallowed at the call site, never aborting a save.

use async_trait::async_trait;

use crate::ports::{AuditError, AuditLog, SaveAuditEntry};

pub struct HttpAuditLog {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAuditLog {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AuditLog for HttpAuditLog {
    async fn record(&self, entry: SaveAuditEntry) -> Result<(), AuditError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&entry)
            .send()
            .await
            .map_err(|err| AuditError::RequestFailed(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Rejected(status.as_u16()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for HttpAuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuditLog")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
