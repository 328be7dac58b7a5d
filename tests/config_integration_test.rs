//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use namescrub::config::{load_config, AnalyzerKind};
use namescrub::domain::RedactorError;
use namescrub::pipeline::RedactionPipeline;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    for var in [
        "NAMESCRUB_APPLICATION_LOG_LEVEL",
        "NAMESCRUB_ANALYZER_KIND",
        "NAMESCRUB_ANALYZER_ENDPOINT",
        "NAMESCRUB_ANALYZER_API_KEY",
        "NAMESCRUB_ANALYZER_TIMEOUT_SECS",
        "NAMESCRUB_PIPELINE_PLACEHOLDER",
        "NAMESCRUB_PIPELINE_COMPUTE_METRICS",
        "NAMESCRUB_AUDIT_ENABLED",
        "TEST_NAMESCRUB_TOKEN",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[analyzer]
kind = "http"
endpoint = "https://ner.example.com/v1/entities"
api_key = "plain-token"
timeout_secs = 12
person_labels = ["PERSON", "B-PER", "I-PER"]

[pipeline]
placeholder = "<redacted>"
compute_metrics = false

[audit]
enabled = true
log_path = "/tmp/namescrub/audit.log"
json_format = false

[logging]
local_enabled = false
local_path = "/tmp/namescrub/logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.analyzer.kind, AnalyzerKind::Http);
    assert_eq!(config.analyzer.timeout_secs, 12);
    assert_eq!(config.analyzer.person_labels.len(), 3);
    assert_eq!(
        config.analyzer.api_key.as_ref().unwrap().expose_secret(),
        "plain-token"
    );
    assert_eq!(config.pipeline.placeholder, "<redacted>");
    assert!(!config.pipeline.compute_metrics);
    assert!(config.audit.enabled);
    assert!(!config.audit.json_format);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_NAMESCRUB_TOKEN", "from-env");

    let file = write_config(
        r#"
[analyzer]
endpoint = "http://localhost:8080/ner"
api_key = "${TEST_NAMESCRUB_TOKEN}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(
        config.analyzer.api_key.as_ref().unwrap().expose_secret(),
        "from-env"
    );
    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_config_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[analyzer]
endpoint = "http://localhost:8080/ner"
api_key = "${TEST_NAMESCRUB_TOKEN}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, RedactorError::Configuration(_)));
    assert!(err.to_string().contains("TEST_NAMESCRUB_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NAMESCRUB_ANALYZER_KIND", "gazetteer");
    std::env::set_var("NAMESCRUB_PIPELINE_PLACEHOLDER", "[PERSON]");
    std::env::set_var("NAMESCRUB_PIPELINE_COMPUTE_METRICS", "false");
    std::env::set_var("NAMESCRUB_ANALYZER_TIMEOUT_SECS", "7");

    let file = write_config(
        r#"
[analyzer]
kind = "http"
endpoint = "http://localhost:8080/ner"
names = ["Ann Lee"]
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.analyzer.kind, AnalyzerKind::Gazetteer);
    assert_eq!(config.pipeline.placeholder, "[PERSON]");
    assert!(!config.pipeline.compute_metrics);
    assert_eq!(config.analyzer.timeout_secs, 7);
    cleanup_env_vars();
}

#[test]
fn test_bad_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("NAMESCRUB_AUDIT_ENABLED", "sometimes");

    let file = write_config("[analyzer]\nendpoint = \"http://localhost:8080/ner\"\n");
    assert!(load_config(file.path()).is_err());
    cleanup_env_vars();
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config("[analyzer\nkind = ");
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[tokio::test]
async fn test_pipeline_from_config_with_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let names_path = dir.path().join("names.txt");
    std::fs::write(&names_path, "# clinicians\nGregory House\n\nLisa Cuddy\n").unwrap();
    let audit_path = dir.path().join("audit").join("audit.log");

    let config = {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_env_vars();
        let file = write_config(&format!(
            r#"
[analyzer]
kind = "gazetteer"
names_file = "{}"

[audit]
enabled = true
log_path = "{}"
"#,
            names_path.display().to_string().replace('\\', "/"),
            audit_path.display().to_string().replace('\\', "/"),
        ));
        load_config(file.path()).unwrap()
    };

    let pipeline = RedactionPipeline::from_config(&config).unwrap();
    let result = pipeline
        .process("Gregory House paged Lisa Cuddy")
        .await
        .unwrap();

    assert_eq!(result.text, "[NAME REMOVED] paged [NAME REMOVED]");
    assert!(audit_path.exists());
}
