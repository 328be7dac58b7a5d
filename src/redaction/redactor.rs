//! Person-name redactor

use super::analyzer::TextAnalyzer;
use super::models::{EntitySpan, Redaction, DEFAULT_PERSON_LABELS, PLACEHOLDER};
use super::rewrite::replace_spans;
use crate::domain::AnalyzerError;

/// Replaces person-name spans found by a [`TextAnalyzer`] with a placeholder
///
/// # Examples
///
/// ```
/// use namescrub::redaction::{EntitySpan, NameRedactor};
///
/// let redactor = NameRedactor::new();
/// let spans = vec![
///     EntitySpan::person(0, 5),
///     EntitySpan::new("DATE", 14, 23),
///     EntitySpan::person(10, 13),
/// ];
/// let out = redactor.apply("Alice met Bob yesterday.", &spans);
/// assert_eq!(out.text, "[NAME REMOVED] met [NAME REMOVED] yesterday.");
/// ```
#[derive(Debug, Clone)]
pub struct NameRedactor {
    placeholder: String,
    person_labels: Vec<String>,
}

impl NameRedactor {
    /// Redactor with the default placeholder and person labels
    pub fn new() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            person_labels: DEFAULT_PERSON_LABELS.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Use a different placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Use a different set of labels that mean "person"
    pub fn with_person_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.person_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Placeholder substituted for each name
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether `label` denotes a person (case-insensitive)
    pub fn is_person(&self, label: &str) -> bool {
        self.person_labels
            .iter()
            .any(|l| l.eq_ignore_ascii_case(label))
    }

    /// Ask `analyzer` for entities in `text` once and redact every person.
    ///
    /// Analyzer failures are returned as-is; there is no fallback that
    /// would return `text` with names still in it.
    pub async fn redact(
        &self,
        text: &str,
        analyzer: &dyn TextAnalyzer,
    ) -> Result<Redaction, AnalyzerError> {
        let spans = analyzer.analyze(text).await?;
        tracing::debug!(
            analyzer = analyzer.name(),
            entities = spans.len(),
            "Entities detected"
        );
        Ok(self.apply(text, &spans))
    }

    /// Redact the person spans among `spans`, which must refer to `text`
    pub fn apply(&self, text: &str, spans: &[EntitySpan]) -> Redaction {
        let persons: Vec<EntitySpan> = spans
            .iter()
            .filter(|s| self.is_person(&s.label))
            .cloned()
            .collect();

        let redaction = replace_spans(text, &persons, &self.placeholder);
        for rejected in &redaction.rejected {
            crate::log_span_rejected!(rejected);
        }
        redaction
    }
}

impl Default for NameRedactor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedAnalyzer(Vec<EntitySpan>);

    #[async_trait]
    impl TextAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<Vec<EntitySpan>, AnalyzerError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct DownAnalyzer;

    #[async_trait]
    impl TextAnalyzer for DownAnalyzer {
        async fn analyze(&self, _text: &str) -> Result<Vec<EntitySpan>, AnalyzerError> {
            Err(AnalyzerError::Unavailable("model not loaded".to_string()))
        }

        fn name(&self) -> &str {
            "down"
        }
    }

    #[test]
    fn test_label_matching_is_case_insensitive() {
        let redactor = NameRedactor::new();
        assert!(redactor.is_person("PERSON"));
        assert!(redactor.is_person("person"));
        assert!(redactor.is_person("PER"));
        assert!(!redactor.is_person("ORG"));
    }

    #[test]
    fn test_non_person_spans_ignored() {
        let redactor = NameRedactor::new();
        let spans = vec![EntitySpan::new("ORG", 0, 4), EntitySpan::new("GPE", 8, 14)];
        let out = redactor.apply("ACME in Boston", &spans);
        assert_eq!(out.text, "ACME in Boston");
        assert_eq!(out.names_removed(), 0);
    }

    #[test]
    fn test_custom_labels() {
        let redactor = NameRedactor::new().with_person_labels(["B-PER"]);
        let out = redactor.apply("Hi Ann", &[EntitySpan::new("b-per", 3, 6)]);
        assert_eq!(out.text, "Hi [NAME REMOVED]");
        assert!(!redactor.is_person("PERSON"));
    }

    #[tokio::test]
    async fn test_redact_uses_analyzer_spans() {
        let redactor = NameRedactor::new().with_placeholder("[X]");
        let analyzer = FixedAnalyzer(vec![EntitySpan::person(0, 5)]);
        let out = redactor.redact("Alice waved", &analyzer).await.unwrap();
        assert_eq!(out.text, "[X] waved");
        assert_eq!(redactor.placeholder(), "[X]");
    }

    #[tokio::test]
    async fn test_analyzer_failure_propagates() {
        let redactor = NameRedactor::new();
        let result = redactor.redact("Alice waved", &DownAnalyzer).await;
        assert!(matches!(result, Err(AnalyzerError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_invalid_spans_reported_not_fatal() {
        let redactor = NameRedactor::new();
        let analyzer = FixedAnalyzer(vec![EntitySpan::person(0, 3), EntitySpan::person(2, 99)]);
        let out = redactor.redact("Ann", &analyzer).await.unwrap();
        assert_eq!(out.text, "[NAME REMOVED]");
        assert_eq!(out.rejected.len(), 1);
    }
}
