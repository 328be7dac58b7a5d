//! Init command implementation
//!
//! Writes a commented default configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "namescrub.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing namescrub configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::default_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Point [analyzer] at your NER service, or switch to kind = \"gazetteer\"");
                println!("  2. Put secrets in a .env file (e.g. NAMESCRUB_ANALYZER_API_KEY)");
                println!("  3. Validate configuration: namescrub validate-config");
                println!("  4. Redact a file: namescrub redact --input notes.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Default configuration with comments
    fn default_config() -> &'static str {
        r#"# namescrub configuration file
#
# Values of the form ${VAR} are read from the environment (or .env).
# Any key can also be overridden with NAMESCRUB_<SECTION>_<KEY>.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[analyzer]
# "http" calls an NER service; "gazetteer" matches a fixed list of names
kind = "http"

# NER service endpoint. Receives {"text": ...} and answers
# {"entities": [{"label": "PERSON", "start": 0, "end": 5}]}
endpoint = "http://localhost:8080/ner"

# Optional bearer token
# api_key = "${NAMESCRUB_NER_TOKEN}"

# Upper bound on one analyzer call, in seconds
timeout_secs = 30

# Entity labels treated as person names (case-insensitive)
person_labels = ["PERSON", "PER"]

# Gazetteer analyzer only
# names = ["Jane Roe"]
# names_file = "names.txt"

[pipeline]
# Text substituted for each person name
placeholder = "[NAME REMOVED]"

# Report word-count reduction after scrubbing
compute_metrics = true

[audit]
# Append one entry per invocation; names are stored only as SHA-256 hashes
enabled = false
log_path = "./audit/namescrub-audit.log"
json_format = true

[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "./logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config_str, AnalyzerKind};

    #[test]
    fn test_default_config_is_loadable() {
        let config = load_config_str(InitArgs::default_config()).unwrap();
        assert_eq!(config.analyzer.kind, AnalyzerKind::Http);
        assert_eq!(config.pipeline.placeholder, "[NAME REMOVED]");
        assert!(!config.audit.enabled);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("namescrub.toml");
        std::fs::write(&path, "keep me").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("[analyzer]"));
    }
}
