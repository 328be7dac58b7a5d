//! Configuration management for namescrub.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! namescrub uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `NAMESCRUB_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use namescrub::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("namescrub.toml")?;
//!
//! println!("Analyzer: {}", config.analyzer.kind);
//! println!("Placeholder: {}", config.pipeline.placeholder);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`AnalyzerConfig`] - Entity analyzer selection and connection
//! - [`PipelineConfig`] - Placeholder text and metrics
//! - [`AuditConfig`] - Audit log
//! - [`LoggingConfig`] - Local log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [analyzer]
//! kind = "http"
//! endpoint = "http://localhost:8080/ner"
//! api_key = "${NAMESCRUB_NER_TOKEN}"
//! timeout_secs = 30
//!
//! [pipeline]
//! placeholder = "[NAME REMOVED]"
//! compute_metrics = true
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/namescrub-audit.log"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_str};
pub use schema::{
    AnalyzerConfig, AnalyzerKind, ApplicationConfig, AuditConfig, LoggingConfig, PipelineConfig,
    RedactorConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
