//! Redact command implementation
//!
//! Runs the full pipeline (pattern scrubber, then name redaction) over one
//! text read from a file or stdin.

use super::{exit_code_for, failure_hint, read_input, write_output, EXIT_CONFIG, EXIT_FATAL};
use crate::config::load_config;
use crate::pipeline::{format_summary, RedactionPipeline};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// How the redacted result is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Redacted text only; summary on stderr
    #[default]
    Text,
    /// The full result as JSON
    Json,
}

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip word-count reduction metrics
    #[arg(long)]
    pub no_metrics: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting redact command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if self.no_metrics {
            tracing::info!("Disabling metrics from CLI");
            config.pipeline.compute_metrics = false;
        }

        let pipeline = match RedactionPipeline::from_config(&config) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create redaction pipeline");
                eprintln!("Failed to initialize redaction: {e}");
                if let Some(hint) = failure_hint(&e) {
                    eprintln!("{hint}");
                }
                return Ok(exit_code_for(&e));
            }
        };

        let text = match read_input(self.input.as_deref()) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                eprintln!("Failed to read input: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        let result = match pipeline.process(&text).await {
            Ok(r) => r,
            Err(e) => {
                crate::log_error_with_context!(&e, "Redaction failed");
                eprintln!("Redaction failed: {e}");
                if let Some(hint) = failure_hint(&e) {
                    eprintln!("{hint}");
                }
                return Ok(exit_code_for(&e));
            }
        };

        let rendered = match self.format {
            OutputFormat::Text => result.text.clone(),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(&result)?;
                json.push('\n');
                json
            }
        };

        if let Err(e) = write_output(self.output.as_deref(), &rendered) {
            tracing::error!(error = %e, "Failed to write output");
            eprintln!("Failed to write output: {e}");
            return Ok(EXIT_FATAL);
        }

        if self.format == OutputFormat::Text {
            eprint!("{}", format_summary(&result));
        }

        Ok(0)
    }
}
