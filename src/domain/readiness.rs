//! Editor readiness state machine.
//!
//! Tracks the lifecycle of the embedded editor from mount through
//! restore-from-storage to persistence being safe to enable:
//!
//! `NotReady -> Ready -> RestorePending -> RestoreDone -> SaveEnabled`
//!
//! Teardown (host remount) reverts fully to `NotReady`, which re-arms
//! restoration for the next ready transition and forces persistence off.

/// Lifecycle phase of the embedded editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadinessPhase {
    #[default]
    NotReady,
    Ready,
    RestorePending,
    RestoreDone,
    SaveEnabled,
}

/// Readiness flags derived from the current phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadinessState {
    phase: ReadinessPhase,
}

impl ReadinessState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ReadinessPhase {
        self.phase
    }

    /// Has the editor finished initializing?
    pub fn editor_ready(&self) -> bool {
        self.phase != ReadinessPhase::NotReady
    }

    /// Has startup restore-from-storage run?
    pub fn restoration_done(&self) -> bool {
        matches!(
            self.phase,
            ReadinessPhase::RestoreDone | ReadinessPhase::SaveEnabled
        )
    }

    /// Is it safe to persist the document?
    pub fn save_enabled(&self) -> bool {
        self.phase == ReadinessPhase::SaveEnabled
    }

    /// `NotReady -> Ready`. Returns `false` when already past `NotReady`.
    pub fn mark_editor_ready(&mut self) -> bool {
        if self.phase == ReadinessPhase::NotReady {
            self.phase = ReadinessPhase::Ready;
            true
        } else {
            false
        }
    }

    /// `Ready -> RestorePending`. Returns `false` out of order.
    pub fn begin_restore(&mut self) -> bool {
        if self.phase == ReadinessPhase::Ready {
            self.phase = ReadinessPhase::RestorePending;
            true
        } else {
            false
        }
    }

    /// `RestorePending -> RestoreDone`. Returns `false` out of order.
    pub fn finish_restore(&mut self) -> bool {
        if self.phase == ReadinessPhase::RestorePending {
            self.phase = ReadinessPhase::RestoreDone;
            true
        } else {
            false
        }
    }

    /// `RestoreDone -> SaveEnabled`. Returns `false` out of order, in
    /// particular after a teardown reset raced the enable grace timer.
    pub fn enable_save(&mut self) -> bool {
        if self.phase == ReadinessPhase::RestoreDone {
            self.phase = ReadinessPhase::SaveEnabled;
            true
        } else {
            false
        }
    }

    /// Revert fully to `NotReady` on editor teardown.
    pub fn reset(&mut self) {
        self.phase = ReadinessPhase::NotReady;
    }
}
