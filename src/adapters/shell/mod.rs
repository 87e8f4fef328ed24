//! Shell host adapters.
//!
//! Hosts outside the desktop shell use the stub, which reports the
//! capability as absent so the shell channel is skipped.

use async_trait::async_trait;

use crate::domain::diagram::SaveFormat;
use crate::ports::{ShellError, ShellHost};

/// Stub for hosts without the desktop-shell capability.
#[derive(Debug, Clone, Default)]
pub struct UnavailableShellHost;

impl UnavailableShellHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ShellHost for UnavailableShellHost {
    async fn available(&self) -> bool {
        false
    }

    async fn save_file(
        &self,
        _data: &str,
        _filename: &str,
        _format: SaveFormat,
    ) -> Result<bool, ShellError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stub_reports_unavailable_and_declines_saves() {
        let host = UnavailableShellHost::new();
        assert!(!host.available().await);
        assert_eq!(host.save_file("d", "f.xml", SaveFormat::Xml).await.unwrap(), false);
    }
}
