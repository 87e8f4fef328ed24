//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the
//! `DIAGRAM_WORKBENCH` prefix and `__` as the nesting separator; every
//! section has sensible defaults, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use diagram_workbench::config::WorkbenchConfig;
//!
//! let config = WorkbenchConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod audit;
mod error;
mod storage;
mod timing;

pub use audit::AuditConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;
pub use timing::TimingConfig;

use serde::Deserialize;

/// Root workbench configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkbenchConfig {
    /// Persistence keys, thresholds, and the download directory.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Timeouts, debounce windows, and delays.
    #[serde(default)]
    pub timing: TimingConfig,

    /// Save-audit endpoint.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl WorkbenchConfig {
    /// Load configuration from environment variables.
    ///
    /// - `DIAGRAM_WORKBENCH__TIMING__EXPORT_TIMEOUT_MS=2000` -> `timing.export_timeout_ms`
    /// - `DIAGRAM_WORKBENCH__STORAGE__DOWNLOAD_DIR=...` -> `storage.download_dir`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIAGRAM_WORKBENCH")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.timing.validate()?;
        self.audit.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let config = WorkbenchConfig::default();
        assert_eq!(config.timing.export_timeout_ms, 2000);
        assert_eq!(config.timing.persist_debounce_ms, 1000);
        assert_eq!(config.timing.save_enable_grace_ms, 500);
        assert_eq!(config.storage.min_persist_len, 300);
        assert_eq!(config.storage.history_capacity, 20);
        config.validate().unwrap();
    }
}
