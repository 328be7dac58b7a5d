//! HTTP NER service analyzer
//!
//! Talks to an entity-recognition service that owns the model (for example
//! a spaCy transformer pipeline behind a small web server). The service
//! receives `{"text": "..."}` and answers
//! `{"entities": [{"label": "PERSON", "start": 4, "end": 14}, ...]}` with
//! character offsets into the submitted text.

use super::TextAnalyzer;
use crate::config::SecretString;
use crate::domain::{AnalyzerError, RedactorError, Result};
use crate::redaction::models::EntitySpan;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    entities: Vec<EntitySpan>,
}

/// Analyzer backed by a remote NER service
///
/// # Example
///
/// ```no_run
/// use namescrub::redaction::analyzer::{HttpAnalyzer, TextAnalyzer};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoint = url::Url::parse("http://localhost:8080/ner")?;
/// let analyzer = HttpAnalyzer::new(endpoint, None, Duration::from_secs(30))?;
/// let spans = analyzer.analyze("Alice met Bob").await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpAnalyzer {
    client: Client,
    endpoint: Url,
    api_key: Option<SecretString>,
    timeout: Duration,
}

impl HttpAnalyzer {
    /// Create a new analyzer for `endpoint`
    ///
    /// `timeout` bounds every request end to end.
    pub fn new(endpoint: Url, api_key: Option<SecretString>, timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| {
                RedactorError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            timeout,
        })
    }

    /// Endpoint spans are requested from
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AnalyzerError {
        if err.is_timeout() {
            AnalyzerError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            AnalyzerError::Unavailable(format!("{}: {}", self.endpoint, err))
        }
    }
}

#[async_trait]
impl TextAnalyzer for HttpAnalyzer {
    async fn analyze(&self, text: &str) -> std::result::Result<Vec<EntitySpan>, AnalyzerError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest { text });

        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Analyzer service returned an error");
            return Err(AnalyzerError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))?;

        tracing::debug!(entities = body.entities.len(), "Analyzer service responded");
        Ok(body.entities)
    }

    fn name(&self) -> &str {
        "http"
    }
}
