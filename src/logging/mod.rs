//! Logging and observability
//!
//! Structured logging with:
//! - Console output on stderr (stdout carries redacted text)
//! - Configurable log levels
//! - Optional JSON log files with daily or hourly rotation
//!
//! Person names are never logged. Events carry counts, offsets and lengths.
//!
//! # Example
//!
//! ```no_run
//! use namescrub::logging::init_logging;
//! use namescrub::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a redaction invocation
///
/// # Example
///
/// ```no_run
/// use namescrub::log_redaction_complete;
/// use std::time::Duration;
///
/// let invocation_id = uuid::Uuid::new_v4();
/// log_redaction_complete!(&invocation_id, 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_redaction_complete {
    ($invocation_id:expr, $names_removed:expr, $duration:expr) => {
        tracing::info!(
            invocation_id = %$invocation_id,
            names_removed = $names_removed,
            duration_ms = $duration.as_millis() as u64,
            "Redaction completed"
        );
    };
}

/// Log an analyzer span that was dropped because it does not fit the text
///
/// # Example
///
/// ```no_run
/// use namescrub::log_span_rejected;
/// use namescrub::domain::SpanError;
///
/// let error = SpanError::Inverted { start: 9, end: 4 };
/// log_span_rejected!(&error);
/// ```
#[macro_export]
macro_rules! log_span_rejected {
    ($error:expr) => {
        tracing::warn!(
            error = %$error,
            "Analyzer span rejected"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use namescrub::log_error_with_context;
/// use namescrub::domain::RedactorError;
///
/// let error = RedactorError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::{RedactorError, SpanError};
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let invocation_id = uuid::Uuid::new_v4();
        log_redaction_complete!(&invocation_id, 2usize, Duration::from_millis(5));
        log_span_rejected!(&SpanError::OutOfBounds {
            start: 0,
            end: 10,
            len: 4
        });
        log_error_with_context!(&RedactorError::Audit("bad".to_string()), "testing");
    }
}
