//! Scrub command implementation
//!
//! Runs only the pattern scrubber. No configuration or analyzer is needed.

use super::{read_input, write_output, EXIT_FATAL};
use crate::scrub::scrub_with_hits;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the scrub command
#[derive(Args, Debug)]
pub struct ScrubArgs {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScrubArgs {
    /// Execute the scrub command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let text = match read_input(self.input.as_deref()) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                eprintln!("Failed to read input: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        let (scrubbed, hits) = scrub_with_hits(&text);
        tracing::info!(
            rules_fired = hits.len(),
            matches = hits.iter().map(|h| h.matches).sum::<usize>(),
            "Scrub completed"
        );

        if let Err(e) = write_output(self.output.as_deref(), &scrubbed) {
            tracing::error!(error = %e, "Failed to write output");
            eprintln!("Failed to write output: {e}");
            return Ok(EXIT_FATAL);
        }

        Ok(0)
    }
}
