//! Audit logger for redaction invocations

use crate::domain::{RedactorError, Result};
use crate::pipeline::{RedactionResult, ReductionMetrics};
use crate::redaction::RemovedName;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    invocation_id: String,
    names_removed: usize,
    rejected_spans: usize,
    processing_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<ReductionMetrics>,
    removals: Vec<AuditRemoval>,
}

/// One replaced region (with hashed name)
#[derive(Debug, Serialize)]
struct AuditRemoval {
    start: usize,
    end: usize,
    /// SHA-256 hash of the replaced text (never log plaintext names)
    value_hash: String,
}

/// Append-only audit log of redaction invocations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the parent directory if needed
    pub fn new(log_path: impl Into<PathBuf>, json_format: bool) -> Result<Self> {
        let log_path = log_path.into();
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    RedactorError::Audit(format!(
                        "Failed to create audit log directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Path entries are appended to
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Record one completed invocation
    pub fn log_redaction(&self, result: &RedactionResult, removed: &[RemovedName]) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: result.timestamp.to_rfc3339(),
            invocation_id: result.invocation_id.to_string(),
            names_removed: result.names_removed,
            rejected_spans: result.rejected_spans.len(),
            processing_time_ms: result.processing_time_ms,
            metrics: result.metrics,
            removals: removed
                .iter()
                .map(|r| AuditRemoval {
                    start: r.start,
                    end: r.end,
                    value_hash: hash_value(&r.original),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                RedactorError::Audit(format!(
                    "Failed to open audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })?;

        let line = if self.json_format {
            serde_json::to_string(entry)?
        } else {
            format!(
                "[{}] Invocation: {} | Names removed: {} | Rejected spans: {} | Time: {}ms",
                entry.timestamp,
                entry.invocation_id,
                entry.names_removed,
                entry.rejected_spans,
                entry.processing_time_ms
            )
        };

        writeln!(file, "{line}")
            .map_err(|e| RedactorError::Audit(format!("Failed to write audit entry: {e}")))
    }
}

/// Hash a removed value using SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}
