//! CLI command implementations
//!
//! Commands return an exit code: 0 on success, 2 for configuration
//! errors, 3 when the analyzer fails and 5 for anything else.

pub mod init;
pub mod redact;
pub mod scrub;
pub mod validate;

use crate::domain::RedactorError;
use std::io::{self, Read, Write};
use std::path::Path;

/// Exit code for a configuration error
pub const EXIT_CONFIG: i32 = 2;
/// Exit code when the entity analyzer fails or times out
pub const EXIT_ANALYZER: i32 = 3;
/// Exit code for any other failure
pub const EXIT_FATAL: i32 = 5;

/// Map a domain error to the process exit code
pub fn exit_code_for(error: &RedactorError) -> i32 {
    match error {
        RedactorError::Configuration(_) => EXIT_CONFIG,
        RedactorError::Analyzer(_) => EXIT_ANALYZER,
        _ => EXIT_FATAL,
    }
}

/// Follow-up advice printed after a failed invocation, if any
pub fn failure_hint(error: &RedactorError) -> Option<&'static str> {
    match error {
        RedactorError::Analyzer(e) if e.is_transient() => {
            Some("The analyzer may be temporarily unavailable; retrying may succeed.")
        }
        RedactorError::Analyzer(_) => {
            Some("The analyzer rejected the request; check analyzer.endpoint and analyzer.api_key.")
        }
        RedactorError::Configuration(_) => Some("Run `namescrub validate-config` for details."),
        _ => None,
    }
}

/// Read all of `path`, or stdin when no path is given
pub(crate) fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write `contents` to `path`, or stdout when no path is given
pub(crate) fn write_output(path: Option<&Path>, contents: &str) -> io::Result<()> {
    match path {
        Some(path) => std::fs::write(path, contents),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()
        }
    }
}
