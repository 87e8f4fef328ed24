//! Export correlator - bridges the editor's one-shot export event to
//! awaitable results.
//!
//! The editor emits exactly one exported-content event per export request,
//! with no request identifier on the event. Correlation is therefore a
//! single-slot rendezvous per request kind: at most one outstanding
//! "read current state" request and at most one outstanding "save to file"
//! request, distinguishable by purpose. Completing a request consumes its
//! slot, so stray duplicate completions are inert.
//!
//! Slot registration always precedes the export command (request-then-trigger)
//! so a fast completion can never outrun its callback.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::time::timeout;

use crate::application::persistence::PersistenceDebouncer;
use crate::application::save_pipeline::SavePipeline;
use crate::application::state::SharedState;
use crate::domain::diagram::{DiagramDocument, ExportPayload, SaveFormat, Snapshot};
use crate::ports::{ContentExtractor, DiagramEditor, EditorError, SavedVia};

/// One outstanding "save to file" request.
#[derive(Debug, Clone)]
pub struct FileSaveRequest {
    pub format: SaveFormat,
    pub filename: String,
    /// Try the shell/picker channels before falling back to download.
    pub use_picker: bool,
}

/// Errors surfaced by export correlation.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A read-state request was already outstanding. The read slot rejects
    /// rather than overwrites; callers await one read at a time.
    #[error("A read-state export is already in flight")]
    ReadInFlight,

    #[error("Export timed out after {0} ms")]
    Timeout(u64),

    /// A newer save request overwrote this one (last-writer-wins slot).
    #[error("Save request was superseded by a newer one")]
    Superseded,

    #[error("Exported payload contained no recognizable diagram document")]
    ExtractionFailed,

    #[error(transparent)]
    Editor(#[from] EditorError),
}

struct PendingSave {
    request: FileSaveRequest,
    reply: oneshot::Sender<SavedVia>,
}

pub struct ExportCorrelator {
    editor: Arc<dyn DiagramEditor>,
    extractor: Arc<dyn ContentExtractor>,
    pipeline: Arc<SavePipeline>,
    persistence: Arc<PersistenceDebouncer>,
    state: SharedState,
    read_slot: Mutex<Option<oneshot::Sender<Result<String, ExportError>>>>,
    save_slot: Mutex<Option<PendingSave>>,
    read_timeout: Duration,
}

impl ExportCorrelator {
    pub fn new(
        editor: Arc<dyn DiagramEditor>,
        extractor: Arc<dyn ContentExtractor>,
        pipeline: Arc<SavePipeline>,
        persistence: Arc<PersistenceDebouncer>,
        state: SharedState,
        read_timeout: Duration,
    ) -> Self {
        Self {
            editor,
            extractor,
            pipeline,
            persistence,
            state,
            read_slot: Mutex::new(None),
            save_slot: Mutex::new(None),
            read_timeout,
        }
    }

    /// Ask the editor for its current document text.
    ///
    /// Races the completion event against the read timeout. On timeout the
    /// slot is abandoned: the caller gets `ExportError::Timeout`, the document
    /// is not mutated, and a late completion no longer finds a read slot.
    pub async fn request_current_state(&self) -> Result<String, ExportError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut slot = self.read_slot.lock().await;
            if slot.is_some() {
                return Err(ExportError::ReadInFlight);
            }
            *slot = Some(tx);
        }

        if let Err(err) = self.editor.request_export(SaveFormat::Xml).await {
            self.read_slot.lock().await.take();
            return Err(err.into());
        }

        match timeout(self.read_timeout, rx).await {
            Ok(Ok(result)) => result,
            // Sender dropped without resolving; treat like an abandoned slot.
            Ok(Err(_)) => Err(ExportError::Timeout(self.read_timeout.as_millis() as u64)),
            Err(_elapsed) => {
                self.read_slot.lock().await.take();
                Err(ExportError::Timeout(self.read_timeout.as_millis() as u64))
            }
        }
    }

    /// Ask the editor to export for a file save.
    ///
    /// The save slot is last-writer-wins: a new request submitted while one is
    /// outstanding overwrites it and the superseded caller observes
    /// `ExportError::Superseded`. No timeout is enforced; save dialogs are
    /// user-paced and may take arbitrarily long.
    pub async fn request_file_save(&self, request: FileSaveRequest) -> Result<SavedVia, ExportError> {
        let format = request.format;
        let (tx, rx) = oneshot::channel();
        {
            let mut slot = self.save_slot.lock().await;
            if slot.replace(PendingSave { request, reply: tx }).is_some() {
                tracing::warn!("overwriting outstanding file-save request");
            }
        }

        if let Err(err) = self.editor.request_export(format).await {
            self.save_slot.lock().await.take();
            return Err(err.into());
        }

        rx.await.map_err(|_| ExportError::Superseded)
    }

    /// Single entry point for the editor's exported-content event.
    ///
    /// Dispatch order matters: a pending file save needs the raw payload (an
    /// image payload would fail extraction entirely), so it is served before
    /// any state refresh or read-state delivery.
    pub async fn on_export_completed(&self, payload: ExportPayload) {
        // (a) pending file save gets the raw payload.
        let pending = self.save_slot.lock().await.take();
        if let Some(PendingSave { request, reply }) = pending {
            let image_only = request.format.is_image();
            let via = self.pipeline.execute(&payload, &request).await;
            let _ = reply.send(via);
            if image_only {
                // Image outputs carry no embedded document.
                return;
            }
        }

        // (b) refresh document and snapshot state from the payload.
        let extracted = self.extractor.extract(&payload);
        match &extracted {
            Some(xml) => {
                let document = DiagramDocument::new(xml.clone());
                let snapshot = Snapshot::new(payload.clone(), document.clone());
                {
                    let mut state = self.state.write().await;
                    if state.take_append_flag() {
                        state.history_mut().push(snapshot.clone());
                    }
                    state.set_latest_snapshot(snapshot);
                    state.set_document(document.clone());
                }
                self.persistence.schedule(&document);
            }
            None => {
                tracing::warn!("export payload contained no recognizable diagram document");
            }
        }

        // (c) deliver to a waiting read-state caller. A send after timeout
        // abandonment finds an empty slot and is a no-op.
        if let Some(reply) = self.read_slot.lock().await.take() {
            let result = extracted.ok_or(ExportError::ExtractionFailed);
            let _ = reply.send(result);
        }
    }

    /// Whether a save-to-file request is currently outstanding.
    pub async fn save_in_flight(&self) -> bool {
        self.save_slot.lock().await.is_some()
    }
}

impl std::fmt::Debug for ExportCorrelator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportCorrelator")
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
