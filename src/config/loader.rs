//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{AnalyzerKind, RedactorConfig};
use super::secret::secret_string;
use crate::domain::errors::RedactorError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
});

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into RedactorConfig
/// 4. Applies environment variable overrides (NAMESCRUB_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use namescrub::config::loader::load_config;
///
/// let config = load_config("namescrub.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<RedactorConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(RedactorError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        RedactorError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_str(&contents)
}

/// Same as [`load_config`] for configuration already in memory
pub fn load_config_str(contents: &str) -> Result<RedactorConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: RedactorConfig = toml::from_str(&contents)
        .map_err(|e| RedactorError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        RedactorError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. Every missing variable is reported,
/// not just the first one.
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = ENV_VAR_PATTERN.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(RedactorError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Parses a boolean override, rejecting anything but true/false
fn parse_bool(name: &str, value: &str) -> Result<bool> {
    value.trim().parse().map_err(|_| {
        RedactorError::Configuration(format!("{name} must be 'true' or 'false', got '{value}'"))
    })
}

/// Applies environment variable overrides using NAMESCRUB_* prefix
///
/// Environment variables follow the pattern: NAMESCRUB_<SECTION>_<KEY>
/// For example: NAMESCRUB_ANALYZER_ENDPOINT, NAMESCRUB_PIPELINE_PLACEHOLDER
fn apply_env_overrides(config: &mut RedactorConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("NAMESCRUB_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Analyzer overrides
    if let Ok(val) = std::env::var("NAMESCRUB_ANALYZER_KIND") {
        config.analyzer.kind = match val.to_lowercase().as_str() {
            "http" => AnalyzerKind::Http,
            "gazetteer" => AnalyzerKind::Gazetteer,
            _ => {
                return Err(RedactorError::Configuration(format!(
                    "NAMESCRUB_ANALYZER_KIND must be 'http' or 'gazetteer', got '{val}'"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("NAMESCRUB_ANALYZER_ENDPOINT") {
        config.analyzer.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("NAMESCRUB_ANALYZER_API_KEY") {
        config.analyzer.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("NAMESCRUB_ANALYZER_TIMEOUT_SECS") {
        config.analyzer.timeout_secs = val.parse().map_err(|_| {
            RedactorError::Configuration(format!(
                "NAMESCRUB_ANALYZER_TIMEOUT_SECS must be a whole number of seconds, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("NAMESCRUB_ANALYZER_NAMES_FILE") {
        config.analyzer.names_file = Some(PathBuf::from(val));
    }

    // Pipeline overrides
    if let Ok(val) = std::env::var("NAMESCRUB_PIPELINE_PLACEHOLDER") {
        config.pipeline.placeholder = val;
    }
    if let Ok(val) = std::env::var("NAMESCRUB_PIPELINE_COMPUTE_METRICS") {
        config.pipeline.compute_metrics = parse_bool("NAMESCRUB_PIPELINE_COMPUTE_METRICS", &val)?;
    }

    // Audit overrides
    if let Ok(val) = std::env::var("NAMESCRUB_AUDIT_ENABLED") {
        config.audit.enabled = parse_bool("NAMESCRUB_AUDIT_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("NAMESCRUB_AUDIT_LOG_PATH") {
        config.audit.log_path = PathBuf::from(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("NAMESCRUB_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("NAMESCRUB_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("NAMESCRUB_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("NAMESCRUB_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("NAMESCRUB_LOADER_TEST_TOKEN", "test_value");
        let input = "api_key = \"${NAMESCRUB_LOADER_TEST_TOKEN}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "api_key = \"test_value\"\n");
        std::env::remove_var("NAMESCRUB_LOADER_TEST_TOKEN");
    }

    #[test]
    fn test_substitute_env_vars_reports_all_missing() {
        std::env::remove_var("NAMESCRUB_MISSING_ONE");
        std::env::remove_var("NAMESCRUB_MISSING_TWO");
        let input = "a = \"${NAMESCRUB_MISSING_ONE}\"\nb = \"${NAMESCRUB_MISSING_TWO}\"";
        let err = substitute_env_vars(input).unwrap_err().to_string();
        assert!(err.contains("NAMESCRUB_MISSING_ONE"));
        assert!(err.contains("NAMESCRUB_MISSING_TWO"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("NAMESCRUB_COMMENTED_OUT");
        let input = "# api_key = \"${NAMESCRUB_COMMENTED_OUT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${NAMESCRUB_COMMENTED_OUT}"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-namescrub.toml");
        assert!(matches!(result, Err(RedactorError::Configuration(_))));
    }

    #[test]
    fn test_load_config_str_valid() {
        let config = load_config_str(
            r#"
[application]
log_level = "debug"

[analyzer]
kind = "gazetteer"
names = ["Ann Lee", "Bob Stone"]

[pipeline]
placeholder = "[REDACTED]"
compute_metrics = false
"#,
        )
        .unwrap();

        assert_eq!(config.analyzer.kind, AnalyzerKind::Gazetteer);
        assert_eq!(config.analyzer.names.len(), 2);
        assert_eq!(config.pipeline.placeholder, "[REDACTED]");
        assert!(!config.pipeline.compute_metrics);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = load_config_str(
            r#"
[analyzer]
kind = "http"
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("analyzer.endpoint is required"));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(!parse_bool("X", " false ").unwrap());
        assert!(parse_bool("X", "yes").is_err());
    }
}
