//! Shared workbench state.
//!
//! All mutation flows through one `RwLock`, which is the module's single
//! serialization point for the document slot, history, and readiness flags.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::diagram::{DiagramDocument, Snapshot, SnapshotHistory};
use crate::domain::readiness::ReadinessState;

pub type SharedState = Arc<RwLock<WorkbenchState>>;

/// In-memory state owned by the workbench provider.
#[derive(Debug)]
pub struct WorkbenchState {
    document: DiagramDocument,
    latest_snapshot: Option<Snapshot>,
    history: SnapshotHistory,
    readiness: ReadinessState,
    save_dialog_open: bool,
    /// Set when the next export completion is user-initiated and should be
    /// appended to history. One-shot: consumed by the completion handler.
    append_next_export: bool,
}

impl WorkbenchState {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            document: DiagramDocument::empty(),
            latest_snapshot: None,
            history: SnapshotHistory::new(history_capacity),
            readiness: ReadinessState::new(),
            save_dialog_open: false,
            append_next_export: false,
        }
    }

    pub fn shared(history_capacity: usize) -> SharedState {
        Arc::new(RwLock::new(Self::new(history_capacity)))
    }

    pub fn document(&self) -> &DiagramDocument {
        &self.document
    }

    /// Replace the document wholesale.
    pub fn set_document(&mut self, document: DiagramDocument) {
        self.document = document;
    }

    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.latest_snapshot.as_ref()
    }

    pub fn set_latest_snapshot(&mut self, snapshot: Snapshot) {
        self.latest_snapshot = Some(snapshot);
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut SnapshotHistory {
        &mut self.history
    }

    pub fn readiness(&self) -> ReadinessState {
        self.readiness
    }

    pub fn readiness_mut(&mut self) -> &mut ReadinessState {
        &mut self.readiness
    }

    pub fn save_dialog_open(&self) -> bool {
        self.save_dialog_open
    }

    pub fn set_save_dialog_open(&mut self, open: bool) {
        self.save_dialog_open = open;
    }

    pub fn flag_append_next_export(&mut self) {
        self.append_next_export = true;
    }

    /// Consume the one-shot append flag.
    pub fn take_append_flag(&mut self) -> bool {
        std::mem::take(&mut self.append_next_export)
    }

    /// Atomically reset to the "no diagram" state: canonical empty template,
    /// empty history, no latest snapshot.
    pub fn clear_diagram(&mut self) {
        self.document = DiagramDocument::empty();
        self.latest_snapshot = None;
        self.history.clear();
        self.append_next_export = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagram::ExportPayload;

    #[test]
    fn new_state_starts_on_the_empty_template() {
        let state = WorkbenchState::new(20);
        assert!(state.document().is_empty_template());
        assert!(state.latest_snapshot().is_none());
        assert!(state.history().is_empty());
        assert!(!state.save_dialog_open());
    }

    #[test]
    fn append_flag_is_one_shot() {
        let mut state = WorkbenchState::new(20);
        assert!(!state.take_append_flag());
        state.flag_append_next_export();
        assert!(state.take_append_flag());
        assert!(!state.take_append_flag());
    }

    #[test]
    fn clear_diagram_resets_document_history_and_snapshot() {
        let mut state = WorkbenchState::new(20);
        let doc = DiagramDocument::new("<mxfile>work</mxfile>");
        state.set_document(doc.clone());
        let snapshot = Snapshot::new(ExportPayload::new("data:image/png;base64,AA"), doc);
        state.history_mut().push(snapshot.clone());
        state.set_latest_snapshot(snapshot);
        state.flag_append_next_export();

        state.clear_diagram();

        assert!(state.document().is_empty_template());
        assert!(state.latest_snapshot().is_none());
        assert!(state.history().is_empty());
        assert!(!state.take_append_flag());
    }
}
