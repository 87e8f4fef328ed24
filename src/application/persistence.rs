//! Trailing-edge debounced persistence of the document text.
//!
//! Every document change (re)starts a timer; a change inside the window
//! cancels the previous timer, so one quiet period produces exactly one
//! storage write carrying the final value. Writes are gated by the
//! save-enabled flag and a minimum meaningful-content length, which keeps
//! placeholder/template content out of durable storage. Storage failures are
//! logged and swallowed; in-memory state is unaffected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::diagram::DiagramDocument;
use crate::ports::KeyValueStore;

pub struct PersistenceDebouncer {
    store: Arc<dyn KeyValueStore>,
    key: String,
    window: Duration,
    min_len: usize,
    enabled: AtomicBool,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl PersistenceDebouncer {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
        window: Duration,
        min_len: usize,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            window,
            min_len,
            // Disabled until restoration has run and the grace period passed.
            enabled: AtomicBool::new(false),
            pending: Mutex::new(None),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Enable or disable debounced writes. Disabling also cancels any write
    /// already scheduled, covering editor teardown mid-window.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        if !enabled {
            if let Some(handle) = self.pending.lock().expect("debouncer lock poisoned").take() {
                handle.abort();
            }
        }
    }

    /// Schedule a write of `document` after the quiet window, replacing any
    /// previously scheduled write.
    pub fn schedule(&self, document: &DiagramDocument) {
        if !self.is_enabled() {
            return;
        }
        if !document.is_meaningful(self.min_len) {
            tracing::debug!(len = document.len(), "skipping persistence of placeholder-sized document");
            return;
        }

        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let text = document.as_str().to_string();
        let window = self.window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if let Err(err) = store.set(&key, &text).await {
                tracing::warn!(%err, "debounced persistence write failed");
            }
        });

        let mut pending = self.pending.lock().expect("debouncer lock poisoned");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Write immediately, bypassing the gate and the window. Used by manual
    /// file saves, which always refresh persisted state.
    pub async fn write_through(&self, text: &str) {
        if let Err(err) = self.store.set(&self.key, text).await {
            tracing::warn!(%err, "write-through persistence failed");
        }
    }
}

impl std::fmt::Debug for PersistenceDebouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceDebouncer")
            .field("key", &self.key)
            .field("window", &self.window)
            .field("min_len", &self.min_len)
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
