//! DiagramWorkbench - the facade UI consumers hold.
//!
//! Wires the shared state, export correlator, save pipeline, and persistence
//! debouncer into one unit of state and operations: load/clear/export/save,
//! readiness transitions, the save-dialog flag, and the post-save-success
//! callback.

use std::sync::Arc;
use std::time::Duration;

use crate::application::correlator::{ExportCorrelator, ExportError, FileSaveRequest};
use crate::application::persistence::PersistenceDebouncer;
use crate::application::save_pipeline::{SavePipeline, SaveSuccessCallback};
use crate::application::state::{SharedState, WorkbenchState};
use crate::config::WorkbenchConfig;
use crate::domain::diagram::{DiagramDocument, ExportPayload, SaveFormat, Snapshot};
use crate::domain::readiness::ReadinessState;
use crate::ports::{
    AuditLog, ContentExtractor, DiagramEditor, DocumentValidationError, DocumentValidator,
    EditorError, KeyValueStore, SaveChannel, SavedVia,
};

/// Errors surfaced to UI consumers. Everything else is recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum WorkbenchError {
    #[error("Invalid diagram document: {0}")]
    Validation(#[from] DocumentValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// The external collaborators the workbench is built from.
pub struct WorkbenchPorts {
    pub editor: Arc<dyn DiagramEditor>,
    pub validator: Arc<dyn DocumentValidator>,
    pub extractor: Arc<dyn ContentExtractor>,
    pub store: Arc<dyn KeyValueStore>,
    pub audit: Arc<dyn AuditLog>,
    /// Tried in order when the caller asks for a path selector.
    pub preferred_channels: Vec<Arc<dyn SaveChannel>>,
    /// Always-available fallback destination.
    pub fallback_channel: Arc<dyn SaveChannel>,
}

pub struct DiagramWorkbench {
    state: SharedState,
    editor: Arc<dyn DiagramEditor>,
    validator: Arc<dyn DocumentValidator>,
    store: Arc<dyn KeyValueStore>,
    correlator: ExportCorrelator,
    pipeline: Arc<SavePipeline>,
    persistence: Arc<PersistenceDebouncer>,
    document_key: String,
    save_enable_grace: Duration,
}

impl DiagramWorkbench {
    pub fn new(ports: WorkbenchPorts, config: &WorkbenchConfig) -> Self {
        let state = WorkbenchState::shared(config.storage.history_capacity);
        let persistence = Arc::new(PersistenceDebouncer::new(
            Arc::clone(&ports.store),
            config.storage.document_key.clone(),
            config.timing.persist_debounce(),
            config.storage.min_persist_len,
        ));
        let pipeline = Arc::new(SavePipeline::new(
            Arc::clone(&ports.extractor),
            Arc::clone(&persistence),
            ports.audit,
            ports.preferred_channels,
            ports.fallback_channel,
            config.timing.success_callback_delay(),
        ));
        let correlator = ExportCorrelator::new(
            Arc::clone(&ports.editor),
            ports.extractor,
            Arc::clone(&pipeline),
            Arc::clone(&persistence),
            Arc::clone(&state),
            config.timing.export_timeout(),
        );
        Self {
            state,
            editor: ports.editor,
            validator: ports.validator,
            store: ports.store,
            correlator,
            pipeline,
            persistence,
            document_key: config.storage.document_key.clone(),
            save_enable_grace: config.timing.save_enable_grace(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Document operations
    // ───────────────────────────────────────────────────────────────

    /// Validate and load new document text into the editor.
    ///
    /// Validation failures are the one class of error surfaced to callers;
    /// the load is aborted and state is untouched.
    pub async fn load_diagram(&self, text: &str) -> Result<(), WorkbenchError> {
        let fixed = self.validator.validate(text)?;
        self.editor.load(&fixed).await?;
        let document = DiagramDocument::new(fixed);
        self.state.write().await.set_document(document.clone());
        self.persistence.schedule(&document);
        Ok(())
    }

    /// Reset to the "no diagram" state: empty template, cleared history and
    /// snapshot, editor reloaded with the template.
    pub async fn clear_diagram(&self) -> Result<(), WorkbenchError> {
        {
            let mut state = self.state.write().await;
            state.clear_diagram();
        }
        self.editor.load(DiagramDocument::empty().as_str()).await?;
        Ok(())
    }

    /// Current document text as awaited from the live editor.
    pub async fn request_current_state(&self) -> Result<String, WorkbenchError> {
        Ok(self.correlator.request_current_state().await?)
    }

    /// User-initiated export: the resulting snapshot is appended to history.
    pub async fn capture_snapshot(&self) -> Result<(), WorkbenchError> {
        self.state.write().await.flag_append_next_export();
        self.editor.request_export(SaveFormat::Png).await?;
        Ok(())
    }

    /// Save the current diagram to a file in the given format.
    pub async fn save_to_file(
        &self,
        format: SaveFormat,
        filename: impl Into<String>,
        use_picker: bool,
    ) -> Result<SavedVia, WorkbenchError> {
        let saved = self
            .correlator
            .request_file_save(FileSaveRequest {
                format,
                filename: filename.into(),
                use_picker,
            })
            .await?;
        Ok(saved)
    }

    /// Entry point the host wires the editor's exported-content event to.
    pub async fn on_export_completed(&self, payload: ExportPayload) {
        self.correlator.on_export_completed(payload).await;
    }

    // ───────────────────────────────────────────────────────────────
    // Readiness and restoration
    // ───────────────────────────────────────────────────────────────

    /// Handle the editor's ready signal: run restore-from-storage once, then
    /// enable persistence after a grace period so a restored placeholder never
    /// clobbers storage.
    pub async fn editor_ready(&self) -> Result<(), WorkbenchError> {
        {
            let mut state = self.state.write().await;
            if !state.readiness_mut().mark_editor_ready() {
                // Already past NotReady; restoration ran for this mount.
                return Ok(());
            }
            state.readiness_mut().begin_restore();
        }

        match self.store.get(&self.document_key).await {
            Ok(Some(text)) => {
                // Trusted source: persisted text bypasses validation.
                self.editor.load(&text).await?;
                self.state
                    .write()
                    .await
                    .set_document(DiagramDocument::new(text));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%err, "restoring persisted diagram failed");
            }
        }

        self.state.write().await.readiness_mut().finish_restore();

        let state = Arc::clone(&self.state);
        let persistence = Arc::clone(&self.persistence);
        let grace = self.save_enable_grace;
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            let mut state = state.write().await;
            // A teardown during the grace period leaves the transition
            // rejected and persistence off.
            if state.readiness_mut().enable_save() {
                persistence.set_enabled(true);
            }
        });

        Ok(())
    }

    /// Handle editor teardown (host remount): readiness reverts fully to
    /// NotReady and persistence is forced off until the next ready signal.
    pub async fn editor_torn_down(&self) {
        self.persistence.set_enabled(false);
        self.state.write().await.readiness_mut().reset();
    }

    // ───────────────────────────────────────────────────────────────
    // Accessors
    // ───────────────────────────────────────────────────────────────

    pub async fn document_text(&self) -> String {
        self.state.read().await.document().as_str().to_string()
    }

    pub async fn latest_snapshot(&self) -> Option<Snapshot> {
        self.state.read().await.latest_snapshot().cloned()
    }

    /// Snapshot history, oldest first.
    pub async fn history(&self) -> Vec<Snapshot> {
        self.state.read().await.history().iter().cloned().collect()
    }

    pub async fn readiness(&self) -> ReadinessState {
        self.state.read().await.readiness()
    }

    pub async fn save_dialog_open(&self) -> bool {
        self.state.read().await.save_dialog_open()
    }

    pub async fn open_save_dialog(&self) {
        self.state.write().await.set_save_dialog_open(true);
    }

    pub async fn close_save_dialog(&self) {
        self.state.write().await.set_save_dialog_open(false);
    }

    /// Register the callback invoked shortly after each successful save.
    pub fn on_save_success(&self, callback: SaveSuccessCallback) {
        self.pipeline.set_success_callback(callback);
    }
}

impl std::fmt::Debug for DiagramWorkbench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagramWorkbench")
            .field("document_key", &self.document_key)
            .field("save_enable_grace", &self.save_enable_grace)
            .finish()
    }
}
