//! Save pipeline - turns one exported payload into persisted bytes in exactly
//! one destination channel.
//!
//! Channel preference order is fixed: desktop shell, then the native save
//! picker (both only when the caller asked for a path selector), then the
//! always-available download directory. Every attempt is isolated; a
//! cancellation or failure logs and falls through to the next channel, and no
//! save failure is surfaced to the caller beyond the fallback completing
//! nominally.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use uuid::Uuid;

use crate::application::correlator::FileSaveRequest;
use crate::application::persistence::PersistenceDebouncer;
use crate::domain::diagram::{DiagramDocument, ExportPayload, SaveFormat};
use crate::ports::{
    AuditLog, ChannelError, ContentExtractor, SaveArtifact, SaveAuditEntry, SaveChannel, SavedVia,
};

/// Callback invoked (after a short delay) once a save has gone out.
pub type SaveSuccessCallback = Arc<dyn Fn() + Send + Sync>;

pub struct SavePipeline {
    extractor: Arc<dyn ContentExtractor>,
    persistence: Arc<PersistenceDebouncer>,
    audit: Arc<dyn AuditLog>,
    /// Tried in order, only when the caller requested a path selector.
    preferred: Vec<Arc<dyn SaveChannel>>,
    /// Always available; assumed to succeed since completion is unobservable.
    fallback: Arc<dyn SaveChannel>,
    session_id: Uuid,
    success_delay: Duration,
    on_success: RwLock<Option<SaveSuccessCallback>>,
}

impl SavePipeline {
    pub fn new(
        extractor: Arc<dyn ContentExtractor>,
        persistence: Arc<PersistenceDebouncer>,
        audit: Arc<dyn AuditLog>,
        preferred: Vec<Arc<dyn SaveChannel>>,
        fallback: Arc<dyn SaveChannel>,
        success_delay: Duration,
    ) -> Self {
        Self {
            extractor,
            persistence,
            audit,
            preferred,
            fallback,
            session_id: Uuid::new_v4(),
            success_delay,
            on_success: RwLock::new(None),
        }
    }

    /// Register the post-save-success callback.
    pub fn set_success_callback(&self, callback: SaveSuccessCallback) {
        *self.on_success.write().expect("success callback lock poisoned") = Some(callback);
    }

    /// Run the full pipeline for one exported payload.
    pub async fn execute(&self, payload: &ExportPayload, request: &FileSaveRequest) -> SavedVia {
        let artifact = self.materialize(payload, request).await;
        self.spawn_audit(&artifact);

        if request.use_picker {
            for channel in &self.preferred {
                if !channel.is_available().await {
                    continue;
                }
                match channel.attempt(&artifact).await {
                    Ok(via) => {
                        tracing::debug!(channel = channel.name(), "save handled");
                        self.schedule_success();
                        return via;
                    }
                    Err(ChannelError::Cancelled) => {
                        tracing::debug!(
                            channel = channel.name(),
                            "save cancelled by user, trying next channel"
                        );
                    }
                    Err(err) => {
                        tracing::warn!(channel = channel.name(), %err, "save channel failed, falling through");
                    }
                }
            }
        }

        let via = match self.fallback.attempt(&artifact).await {
            Ok(via) => via,
            Err(err) => {
                tracing::error!(%err, "fallback download channel failed");
                SavedVia::Download
            }
        };
        self.schedule_success();
        via
    }

    /// Transform the raw payload into final content per format.
    async fn materialize(&self, payload: &ExportPayload, request: &FileSaveRequest) -> SaveArtifact {
        match request.format {
            SaveFormat::Xml => {
                let text = self
                    .extractor
                    .extract(payload)
                    .unwrap_or_else(|| payload.as_str().to_string());
                let document = DiagramDocument::new(text).ensure_root_marker();
                // Manual save always refreshes persisted state.
                self.persistence.write_through(document.as_str()).await;
                SaveArtifact::text(request.filename.clone(), SaveFormat::Xml, document.into_string())
            }
            SaveFormat::Png => {
                // Self-describing encoded image; strip the data-URL header if
                // present, keeping the base64 body.
                let body = payload
                    .data_url_body()
                    .unwrap_or_else(|| payload.as_str())
                    .to_string();
                SaveArtifact::base64(request.filename.clone(), SaveFormat::Png, body)
            }
            SaveFormat::Svg => SaveArtifact::text(
                request.filename.clone(),
                SaveFormat::Svg,
                payload.as_str().to_string(),
            ),
        }
    }

    /// Fire-and-forget audit entry; failure never aborts the save.
    fn spawn_audit(&self, artifact: &SaveArtifact) {
        let audit = Arc::clone(&self.audit);
        let entry = SaveAuditEntry::new(
            artifact.filename.clone(),
            artifact.format,
            Some(self.session_id),
        );
        tokio::spawn(async move {
            if let Err(err) = audit.record(entry).await {
                tracing::warn!(%err, "save audit logging failed");
            }
        });
    }

    /// Invoke the registered success callback after a short delay, giving the
    /// destination a moment to pick the bytes up.
    fn schedule_success(&self) {
        let callback = self
            .on_success
            .read()
            .expect("success callback lock poisoned")
            .clone();
        let Some(callback) = callback else { return };
        let delay = self.success_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}

impl std::fmt::Debug for SavePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavePipeline")
            .field("session_id", &self.session_id)
            .field("preferred_channels", &self.preferred.len())
            .field("success_delay", &self.success_delay)
            .finish()
    }
}
