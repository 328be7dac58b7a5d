//! Audit logging module
//!
//! Append-only record of redaction invocations. Removed names are stored
//! only as SHA-256 hashes.

pub mod logger;

pub use logger::AuditLogger;
