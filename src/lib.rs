//! Diagram Workbench - state and export/save orchestration for an embedded
//! diagram-editing surface.
//!
//! This crate tracks the current diagram document, a bounded history of
//! rendered snapshots, readiness of the embedded editor, and orchestrates
//! export/save flows to durable storage, a downloads directory, or a
//! desktop-shell file picker.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
