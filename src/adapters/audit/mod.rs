//! Audit log adapters.

mod http_audit_log;
mod noop;

pub use http_audit_log::HttpAuditLog;
pub use noop::NoopAuditLog;
