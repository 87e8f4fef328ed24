//! Timing configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Timeouts, debounce windows, and delays.
///
/// The read-state export is the only operation with an enforced timeout;
/// file saves are user-paced and wait indefinitely.
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Timeout for a read-state export round-trip.
    #[serde(default = "default_export_timeout_ms")]
    pub export_timeout_ms: u64,

    /// Trailing-edge debounce window for document persistence.
    #[serde(default = "default_persist_debounce_ms")]
    pub persist_debounce_ms: u64,

    /// Grace period between restoration finishing and persistence enabling,
    /// so restored placeholder content never clobbers storage.
    #[serde(default = "default_save_enable_grace_ms")]
    pub save_enable_grace_ms: u64,

    /// Delay before the post-save-success callback fires.
    #[serde(default = "default_success_callback_delay_ms")]
    pub success_callback_delay_ms: u64,
}

impl TimingConfig {
    pub fn export_timeout(&self) -> Duration {
        Duration::from_millis(self.export_timeout_ms)
    }

    pub fn persist_debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }

    pub fn save_enable_grace(&self) -> Duration {
        Duration::from_millis(self.save_enable_grace_ms)
    }

    pub fn success_callback_delay(&self) -> Duration {
        Duration::from_millis(self.success_callback_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.export_timeout_ms == 0 {
            return Err(ValidationError::InvalidExportTimeout);
        }
        if self.persist_debounce_ms == 0 {
            return Err(ValidationError::InvalidDebounceWindow);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            export_timeout_ms: default_export_timeout_ms(),
            persist_debounce_ms: default_persist_debounce_ms(),
            save_enable_grace_ms: default_save_enable_grace_ms(),
            success_callback_delay_ms: default_success_callback_delay_ms(),
        }
    }
}

fn default_export_timeout_ms() -> u64 {
    2000
}

fn default_persist_debounce_ms() -> u64 {
    1000
}

fn default_save_enable_grace_ms() -> u64 {
    500
}

fn default_success_callback_delay_ms() -> u64 {
    150
}
