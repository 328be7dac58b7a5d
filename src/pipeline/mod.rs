//! Redaction pipeline
//!
//! Runs the pattern scrubber and then the name redactor over one text:
//!
//! 1. [`scrub_with_hits`] removes URLs, e-mail addresses, images and markup
//! 2. [`ReductionMetrics`] compares word counts before and after scrubbing
//! 3. the configured [`TextAnalyzer`] finds entities in the scrubbed text
//! 4. every person span is replaced by the placeholder
//!
//! Analyzer failures and timeouts abort the invocation. No partially
//! redacted text is ever returned.

pub mod metrics;
pub mod report;

pub use metrics::{word_count, ReductionMetrics};
pub use report::format_summary;

use crate::audit::AuditLogger;
use crate::config::RedactorConfig;
use crate::domain::{AnalyzerError, Result, SpanError};
use crate::redaction::{
    create_analyzer, NameRedactor, TextAnalyzer, DEFAULT_PERSON_LABELS, PLACEHOLDER,
};
use crate::scrub::{scrub_with_hits, RuleHit};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-pipeline behavior switches
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Text substituted for each person name
    pub placeholder: String,
    /// Whether to compute [`ReductionMetrics`]
    pub compute_metrics: bool,
    /// Upper bound on one analyzer call; `None` waits indefinitely
    pub analyzer_timeout: Option<Duration>,
    /// Entity labels treated as person names
    pub person_labels: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            compute_metrics: true,
            analyzer_timeout: Some(Duration::from_secs(30)),
            person_labels: DEFAULT_PERSON_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Outcome of one pipeline invocation
#[derive(Debug, Clone, Serialize)]
pub struct RedactionResult {
    /// Identifier shared with the log and audit entries of this run
    pub invocation_id: Uuid,
    /// When the redaction finished
    pub timestamp: DateTime<Utc>,
    /// Scrubbed and name-redacted text
    pub text: String,
    /// Word counts before and after scrubbing, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ReductionMetrics>,
    /// Placeholders inserted (merged overlaps count once)
    pub names_removed: usize,
    /// Analyzer spans that did not fit the text
    pub rejected_spans: Vec<SpanError>,
    /// Matches per scrub rule, in application order
    pub scrub_hits: Vec<RuleHit>,
    /// Wall time from input to redacted text
    pub processing_time_ms: u64,
}

/// Scrubber plus name redactor, bound to one analyzer
pub struct RedactionPipeline {
    analyzer: Arc<dyn TextAnalyzer>,
    redactor: NameRedactor,
    options: PipelineOptions,
    audit: Option<AuditLogger>,
}

impl RedactionPipeline {
    /// Create a pipeline around `analyzer`
    pub fn new(analyzer: Arc<dyn TextAnalyzer>, options: PipelineOptions) -> Self {
        let redactor = NameRedactor::new()
            .with_placeholder(options.placeholder.clone())
            .with_person_labels(options.person_labels.clone());

        Self {
            analyzer,
            redactor,
            options,
            audit: None,
        }
    }

    /// Append an audit entry for every successful invocation
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Build the analyzer, options and audit logger described by `config`
    pub fn from_config(config: &RedactorConfig) -> Result<Self> {
        let analyzer = create_analyzer(&config.analyzer)?;
        let options = PipelineOptions {
            placeholder: config.pipeline.placeholder.clone(),
            compute_metrics: config.pipeline.compute_metrics,
            analyzer_timeout: Some(Duration::from_secs(config.analyzer.timeout_secs)),
            person_labels: config.analyzer.person_labels.clone(),
        };

        let mut pipeline = Self::new(analyzer, options);
        if config.audit.enabled {
            pipeline = pipeline.with_audit_logger(AuditLogger::new(
                &config.audit.log_path,
                config.audit.json_format,
            )?);
        }

        Ok(pipeline)
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Name of the analyzer in use
    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }

    /// Scrub `text`, then redact every person name the analyzer reports
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::RedactorError::Analyzer`] when the analyzer
    /// fails or exceeds the configured timeout, and
    /// [`crate::domain::RedactorError::Audit`] when the audit entry cannot
    /// be written.
    pub async fn process(&self, text: &str) -> Result<RedactionResult> {
        let started = Instant::now();
        let invocation_id = Uuid::new_v4();

        let (scrubbed, scrub_hits) = scrub_with_hits(text);
        let metrics = self
            .options
            .compute_metrics
            .then(|| ReductionMetrics::compute(text, &scrubbed));

        let redaction = match self.options.analyzer_timeout {
            Some(limit) => tokio::time::timeout(
                limit,
                self.redactor.redact(&scrubbed, self.analyzer.as_ref()),
            )
            .await
            .map_err(|_| AnalyzerError::Timeout {
                timeout_ms: limit.as_millis() as u64,
            })??,
            None => {
                self.redactor
                    .redact(&scrubbed, self.analyzer.as_ref())
                    .await?
            }
        };

        let names_removed = redaction.names_removed();
        let result = RedactionResult {
            invocation_id,
            timestamp: Utc::now(),
            text: redaction.text,
            metrics,
            names_removed,
            rejected_spans: redaction.rejected,
            scrub_hits,
            processing_time_ms: started.elapsed().as_millis() as u64,
        };

        if let Some(ref audit) = self.audit {
            audit.log_redaction(&result, &redaction.removed)?;
        }

        crate::log_redaction_complete!(
            &result.invocation_id,
            result.names_removed,
            started.elapsed()
        );

        Ok(result)
    }
}
