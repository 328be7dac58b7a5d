//! Domain error types
//!
//! This module defines the error hierarchy for namescrub.
//! All errors are domain-specific and don't expose third-party types.

use serde::Serialize;
use thiserror::Error;

/// Main namescrub error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum RedactorError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Entity-recognition analyzer errors
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Entity-recognition analyzer errors
///
/// Any of these aborts the current invocation. The pipeline never falls back
/// to "no names found", since that would hand back unredacted names.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer cannot be reached or was never initialized
    #[error("Analyzer unavailable: {0}")]
    Unavailable(String),

    /// The analyzer did not answer within the configured bound
    #[error("Analyzer timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The analyzer service answered with a non-success status
    #[error("Analyzer server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// The analyzer answered with something that is not a span list
    #[error("Invalid analyzer response: {0}")]
    InvalidResponse(String),

    /// Any other analyzer-side failure
    #[error("Analyzer failed: {0}")]
    Failed(String),
}

impl AnalyzerError {
    /// Whether a caller-side retry could reasonably succeed
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Unavailable(_) | Self::Timeout { .. } => true,
            Self::ServerError { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidResponse(_) | Self::Failed(_) => false,
        }
    }
}

/// An entity span that cannot be applied to the text it was reported for
///
/// These are diagnostics, not failures: the offending span is skipped and
/// the rest of the redaction proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpanError {
    /// `start` or `end` is below zero
    #[error("span {start}..{end} has a negative offset")]
    Negative { start: i64, end: i64 },

    /// `start` is greater than `end`
    #[error("span start {start} is after end {end}")]
    Inverted { start: i64, end: i64 },

    /// The span reaches past the end of the text
    #[error("span {start}..{end} is outside text of {len} characters")]
    OutOfBounds { start: i64, end: i64, len: usize },
}

// Conversion from std::io::Error
impl From<std::io::Error> for RedactorError {
    fn from(err: std::io::Error) -> Self {
        RedactorError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for RedactorError {
    fn from(err: serde_json::Error) -> Self {
        RedactorError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for RedactorError {
    fn from(err: toml::de::Error) -> Self {
        RedactorError::Configuration(format!("TOML parse error: {err}"))
    }
}
