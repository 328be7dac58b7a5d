//! Configuration schema types
//!
//! This module defines the TOML configuration structure for namescrub.

use crate::config::SecretString;
use crate::redaction::{DEFAULT_PERSON_LABELS, PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Entity analyzer backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Remote NER service reached over HTTP
    #[default]
    Http,
    /// Offline lookup of a configured name list
    Gazetteer,
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerKind::Http => write!(f, "http"),
            AnalyzerKind::Gazetteer => write!(f, "gazetteer"),
        }
    }
}

/// Main namescrub configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedactorConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Entity analyzer settings
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Pipeline behavior
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RedactorConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.analyzer.validate()?;
        self.pipeline.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Entity analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Which analyzer to construct
    #[serde(default)]
    pub kind: AnalyzerKind,

    /// NER service endpoint (http analyzer)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Bearer token for the NER service
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Upper bound on one analyzer call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Entity labels treated as person names
    #[serde(default = "default_person_labels")]
    pub person_labels: Vec<String>,

    /// Inline person names (gazetteer analyzer)
    #[serde(default)]
    pub names: Vec<String>,

    /// File with one person name per line (gazetteer analyzer)
    #[serde(default)]
    pub names_file: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            kind: AnalyzerKind::default(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
            person_labels: default_person_labels(),
            names: Vec::new(),
            names_file: None,
        }
    }
}

impl AnalyzerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("analyzer.timeout_secs must be > 0".to_string());
        }

        if self.person_labels.iter().all(|l| l.trim().is_empty()) {
            return Err("analyzer.person_labels must contain at least one label".to_string());
        }

        match self.kind {
            AnalyzerKind::Http => {
                let endpoint = self.endpoint.as_deref().ok_or_else(|| {
                    "analyzer.endpoint is required when analyzer.kind = 'http'".to_string()
                })?;
                let url = url::Url::parse(endpoint)
                    .map_err(|e| format!("Invalid analyzer.endpoint '{endpoint}': {e}"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(format!(
                        "analyzer.endpoint must use http or https, got '{}'",
                        url.scheme()
                    ));
                }
            }
            AnalyzerKind::Gazetteer => {
                if self.names.is_empty() && self.names_file.is_none() {
                    return Err(
                        "analyzer.names or analyzer.names_file is required when analyzer.kind = 'gazetteer'"
                            .to_string(),
                    );
                }
            }
        }

        Ok(())
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Text substituted for each person name
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Report word-count reduction metrics
    #[serde(default = "default_true")]
    pub compute_metrics: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            compute_metrics: true,
        }
    }
}

impl PipelineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.placeholder.is_empty() {
            return Err("pipeline.placeholder cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Append an entry per successful invocation
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Write JSON lines instead of plain text
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_person_labels() -> Vec<String> {
    DEFAULT_PERSON_LABELS.iter().map(|l| l.to_string()).collect()
}

fn default_placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/namescrub-audit.log")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
