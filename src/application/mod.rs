//! Application services - the export correlation, save pipeline, persistence
//! debouncing, and the workbench facade that ties them together.

mod correlator;
mod persistence;
mod save_pipeline;
mod state;
mod workbench;

pub use correlator::{ExportCorrelator, ExportError, FileSaveRequest};
pub use persistence::PersistenceDebouncer;
pub use save_pipeline::{SavePipeline, SaveSuccessCallback};
pub use state::{SharedState, WorkbenchState};
pub use workbench::{DiagramWorkbench, WorkbenchError, WorkbenchPorts};
