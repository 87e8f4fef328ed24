//! Integration tests for the multi-channel save chain.
//!
//! Wires real channel adapters over scriptable shell/picker capabilities and
//! drives saves end-to-end through the workbench.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use diagram_workbench::adapters::{
    DownloadChannel, InMemoryStore, MockEditor, MxfileExtractor, NoopAuditLog, PickerChannel,
    ShellChannel, XmlDocumentValidator,
};
use diagram_workbench::application::{DiagramWorkbench, WorkbenchPorts};
use diagram_workbench::config::WorkbenchConfig;
use diagram_workbench::domain::diagram::{ExportPayload, SaveFormat};
use diagram_workbench::ports::{
    FilePicker, PickOutcome, PickerError, SavedVia, ShellError, ShellHost,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Shell host that accepts every save and records what it received.
struct AcceptingShell {
    calls: Mutex<Vec<(String, String, SaveFormat)>>,
}

impl AcceptingShell {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String, SaveFormat)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShellHost for AcceptingShell {
    async fn available(&self) -> bool {
        true
    }

    async fn save_file(
        &self,
        data: &str,
        filename: &str,
        format: SaveFormat,
    ) -> Result<bool, ShellError> {
        self.calls
            .lock()
            .unwrap()
            .push((data.to_string(), filename.to_string(), format));
        Ok(true)
    }
}

/// Shell host whose IPC is broken: available but every save errors.
struct BrokenShell;

#[async_trait]
impl ShellHost for BrokenShell {
    async fn available(&self) -> bool {
        true
    }

    async fn save_file(&self, _: &str, _: &str, _: SaveFormat) -> Result<bool, ShellError> {
        Err(ShellError::save_failed("ipc channel closed"))
    }
}

/// Picker where the user always dismisses the prompt.
struct CancellingPicker;

#[async_trait]
impl FilePicker for CancellingPicker {
    async fn available(&self) -> bool {
        true
    }

    async fn save_with_prompt(
        &self,
        _bytes: &[u8],
        _filename: &str,
        _mime_type: &str,
    ) -> Result<PickOutcome, PickerError> {
        Ok(PickOutcome::Cancelled)
    }
}

/// Picker that saves wherever prompted.
struct SavingPicker;

#[async_trait]
impl FilePicker for SavingPicker {
    async fn available(&self) -> bool {
        true
    }

    async fn save_with_prompt(
        &self,
        _bytes: &[u8],
        _filename: &str,
        _mime_type: &str,
    ) -> Result<PickOutcome, PickerError> {
        Ok(PickOutcome::Saved)
    }
}

struct Harness {
    workbench: Arc<DiagramWorkbench>,
    download_dir: tempfile::TempDir,
}

fn harness(shell: Arc<dyn ShellHost>, picker: Arc<dyn FilePicker>) -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let download_dir = tempfile::tempdir().unwrap();
    let ports = WorkbenchPorts {
        editor: Arc::new(MockEditor::new()),
        validator: Arc::new(XmlDocumentValidator::new()),
        extractor: Arc::new(MxfileExtractor::new()),
        store: Arc::new(InMemoryStore::new()),
        audit: Arc::new(NoopAuditLog::new()),
        preferred_channels: vec![
            Arc::new(ShellChannel::new(shell)),
            Arc::new(PickerChannel::new(picker)),
        ],
        fallback_channel: Arc::new(DownloadChannel::new(download_dir.path())),
    };
    Harness {
        workbench: Arc::new(DiagramWorkbench::new(ports, &WorkbenchConfig::default())),
        download_dir,
    }
}

async fn save(h: &Harness, format: SaveFormat, filename: &str, payload: &str) -> SavedVia {
    let saver = Arc::clone(&h.workbench);
    let filename = filename.to_string();
    let (saved, _) = futures::future::join(
        async move { saver.save_to_file(format, filename, true).await },
        async {
            tokio::task::yield_now().await;
            h.workbench
                .on_export_completed(ExportPayload::new(payload))
                .await;
        },
    )
    .await;
    saved.unwrap()
}

// =============================================================================
// Channel preference order
// =============================================================================

#[tokio::test]
async fn shell_channel_wins_when_available() {
    let shell = Arc::new(AcceptingShell::new());
    let h = harness(Arc::clone(&shell) as _, Arc::new(SavingPicker));

    let via = save(&h, SaveFormat::Xml, "diagram.xml", "<mxfile>doc</mxfile>").await;

    assert_eq!(via, SavedVia::Shell);
    let calls = shell.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "<mxfile>doc</mxfile>");
    assert_eq!(calls[0].1, "diagram.xml");
    // Nothing reached the fallback directory.
    assert!(!h.download_dir.path().join("diagram.xml").exists());
}

#[tokio::test]
async fn shell_receives_base64_for_raster_images() {
    let shell = Arc::new(AcceptingShell::new());
    let h = harness(Arc::clone(&shell) as _, Arc::new(SavingPicker));

    let via = save(
        &h,
        SaveFormat::Png,
        "diagram.png",
        "data:image/png;base64,QUJDRA==",
    )
    .await;

    assert_eq!(via, SavedVia::Shell);
    assert_eq!(shell.calls()[0].0, "QUJDRA==");
    assert_eq!(shell.calls()[0].2, SaveFormat::Png);
}

#[tokio::test]
async fn broken_shell_falls_through_to_the_picker() {
    let h = harness(Arc::new(BrokenShell), Arc::new(SavingPicker));
    let via = save(&h, SaveFormat::Svg, "diagram.svg", "<svg />").await;
    assert_eq!(via, SavedVia::Picker);
}

#[tokio::test]
async fn cancelled_picker_falls_through_to_download() {
    let h = harness(Arc::new(BrokenShell), Arc::new(CancellingPicker));
    let via = save(&h, SaveFormat::Svg, "diagram.svg", "<svg>vector</svg>").await;

    assert_eq!(via, SavedVia::Download);
    let written = std::fs::read_to_string(h.download_dir.path().join("diagram.svg")).unwrap();
    assert_eq!(written, "<svg>vector</svg>");
}

#[tokio::test]
async fn download_decodes_raster_payloads() {
    let h = harness(Arc::new(BrokenShell), Arc::new(CancellingPicker));
    // "ABCD" in base64.
    let via = save(
        &h,
        SaveFormat::Png,
        "diagram.png",
        "data:image/png;base64,QUJDRA==",
    )
    .await;

    assert_eq!(via, SavedVia::Download);
    let written = std::fs::read(h.download_dir.path().join("diagram.png")).unwrap();
    assert_eq!(written, b"ABCD");
}
