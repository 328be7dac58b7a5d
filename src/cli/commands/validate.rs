//! Validate config command implementation
//!
//! Loads and validates the configuration file, then prints a summary.

use super::EXIT_CONFIG;
use crate::config::{load_config, AnalyzerKind};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Analyzer: {}", config.analyzer.kind);
        match config.analyzer.kind {
            AnalyzerKind::Http => {
                println!(
                    "  Endpoint: {}",
                    config.analyzer.endpoint.as_deref().unwrap_or("-")
                );
                println!(
                    "  API Key: {}",
                    if config.analyzer.api_key.is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
            }
            AnalyzerKind::Gazetteer => {
                println!("  Inline Names: {}", config.analyzer.names.len());
                if let Some(ref path) = config.analyzer.names_file {
                    println!("  Names File: {}", path.display());
                }
            }
        }
        println!("  Timeout: {}s", config.analyzer.timeout_secs);
        println!("  Person Labels: {:?}", config.analyzer.person_labels);
        println!("  Placeholder: {}", config.pipeline.placeholder);
        println!("  Metrics: {}", config.pipeline.compute_metrics);
        println!(
            "  Audit Log: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}
