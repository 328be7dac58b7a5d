//! Entity-recognition capability
//!
//! The redactor never owns a model. It is handed something that implements
//! [`TextAnalyzer`] and calls it once per invocation. Model loading, download
//! and device selection belong to whatever sits behind the trait.

pub mod gazetteer;
pub mod http;

pub use gazetteer::GazetteerAnalyzer;
pub use http::HttpAnalyzer;

use crate::config::schema::{AnalyzerConfig, AnalyzerKind};
use crate::domain::{AnalyzerError, RedactorError, Result};
use crate::redaction::models::EntitySpan;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Named-entity recognition over plain text
///
/// Implementations must return spans whose offsets are character offsets
/// into exactly the `text` they were given. They are expected to be
/// read-only after construction so one instance can serve many invocations.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    /// Find all entities in `text`
    async fn analyze(&self, text: &str) -> std::result::Result<Vec<EntitySpan>, AnalyzerError>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}

/// Build the analyzer described by `config`.
///
/// This is the single place the analyzer is constructed; it must succeed
/// before any text is processed.
pub fn create_analyzer(config: &AnalyzerConfig) -> Result<Arc<dyn TextAnalyzer>> {
    tracing::info!(kind = %config.kind, "Creating entity analyzer");

    match config.kind {
        AnalyzerKind::Http => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                RedactorError::Configuration(
                    "analyzer.endpoint is required when analyzer.kind = 'http'".to_string(),
                )
            })?;
            let endpoint = url::Url::parse(endpoint).map_err(|e| {
                RedactorError::Configuration(format!("Invalid analyzer.endpoint '{endpoint}': {e}"))
            })?;
            let analyzer = HttpAnalyzer::new(
                endpoint,
                config.api_key.clone(),
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(analyzer))
        }
        AnalyzerKind::Gazetteer => {
            let mut names = config.names.clone();
            if let Some(ref path) = config.names_file {
                names.extend(gazetteer::read_names_file(path)?);
            }
            Ok(Arc::new(GazetteerAnalyzer::new(names)?))
        }
    }
}
