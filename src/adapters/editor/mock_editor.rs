//! Scriptable editor for tests and development.
//!
//! Records every command. Tests drive the exported-content event by hand
//! through `DiagramWorkbench::on_export_completed`, which keeps completion
//! ordering explicit.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::diagram::SaveFormat;
use crate::ports::{DiagramEditor, EditorError};

#[derive(Debug, Default)]
pub struct MockEditor {
    loads: Mutex<Vec<String>>,
    exports: Mutex<Vec<SaveFormat>>,
    fail_commands: bool,
}

impl MockEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// An editor whose commands all fail, for error-path tests.
    pub fn failing() -> Self {
        Self {
            loads: Mutex::new(Vec::new()),
            exports: Mutex::new(Vec::new()),
            fail_commands: true,
        }
    }

    /// Documents loaded so far, in order.
    pub fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }

    /// Export formats requested so far, in order.
    pub fn exports(&self) -> Vec<SaveFormat> {
        self.exports.lock().unwrap().clone()
    }

    pub fn export_count(&self) -> usize {
        self.exports.lock().unwrap().len()
    }
}

#[async_trait]
impl DiagramEditor for MockEditor {
    async fn load(&self, xml: &str) -> Result<(), EditorError> {
        if self.fail_commands {
            return Err(EditorError::command_failed("scripted load failure"));
        }
        self.loads.lock().unwrap().push(xml.to_string());
        Ok(())
    }

    async fn request_export(&self, format: SaveFormat) -> Result<(), EditorError> {
        if self.fail_commands {
            return Err(EditorError::command_failed("scripted export failure"));
        }
        self.exports.lock().unwrap().push(format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_commands_in_order() {
        let editor = MockEditor::new();
        editor.load("<mxfile>a</mxfile>").await.unwrap();
        editor.request_export(SaveFormat::Xml).await.unwrap();
        editor.request_export(SaveFormat::Png).await.unwrap();

        assert_eq!(editor.loads(), vec!["<mxfile>a</mxfile>".to_string()]);
        assert_eq!(editor.exports(), vec![SaveFormat::Xml, SaveFormat::Png]);
    }

    #[tokio::test]
    async fn failing_editor_rejects_commands() {
        let editor = MockEditor::failing();
        assert!(editor.load("<mxfile />").await.is_err());
        assert!(editor.request_export(SaveFormat::Svg).await.is_err());
    }
}
