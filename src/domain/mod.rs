//! Domain layer - diagram value objects and readiness state.

pub mod diagram;
pub mod readiness;
