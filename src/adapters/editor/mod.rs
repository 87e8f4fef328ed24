//! Editor adapters.

mod mock_editor;

pub use mock_editor::MockEditor;
