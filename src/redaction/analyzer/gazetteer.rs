//! Gazetteer analyzer
//!
//! Offline analyzer that tags whole-word occurrences of a fixed list of
//! person names. Useful where no NER service is reachable and the set of
//! names to hide is known up front.

use super::TextAnalyzer;
use crate::domain::{AnalyzerError, RedactorError, Result};
use crate::redaction::models::EntitySpan;
use async_trait::async_trait;
use regex::Regex;
use std::path::Path;

/// Label given to every span this analyzer emits
const PERSON_LABEL: &str = "PERSON";

/// Name-list analyzer
#[derive(Debug)]
pub struct GazetteerAnalyzer {
    matcher: Regex,
    name_count: usize,
}

impl GazetteerAnalyzer {
    /// Build an analyzer for `names`.
    ///
    /// Blank entries are ignored and duplicates collapsed. Longer names win
    /// over names they contain, so `Mary Ann` is tagged as one span rather
    /// than as `Mary`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no usable name remains.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        names.dedup();

        if names.is_empty() {
            return Err(RedactorError::Configuration(
                "Gazetteer analyzer needs at least one name".to_string(),
            ));
        }

        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"\b(?:{alternation})\b")).map_err(|e| {
            RedactorError::Configuration(format!("Failed to compile name list: {e}"))
        })?;

        tracing::debug!(names = names.len(), "Gazetteer analyzer ready");

        Ok(Self {
            matcher,
            name_count: names.len(),
        })
    }

    /// Number of distinct names known
    pub fn name_count(&self) -> usize {
        self.name_count
    }

    /// Find name occurrences with character offsets
    fn find_spans(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        let mut scanned_bytes = 0;
        let mut scanned_chars = 0;

        for m in self.matcher.find_iter(text) {
            scanned_chars += text[scanned_bytes..m.start()].chars().count();
            let start = scanned_chars;
            let end = start + m.as_str().chars().count();
            spans.push(EntitySpan::new(PERSON_LABEL, start as i64, end as i64));
            scanned_bytes = m.end();
            scanned_chars = end;
        }

        spans
    }
}

#[async_trait]
impl TextAnalyzer for GazetteerAnalyzer {
    async fn analyze(&self, text: &str) -> std::result::Result<Vec<EntitySpan>, AnalyzerError> {
        Ok(self.find_spans(text))
    }

    fn name(&self) -> &str {
        "gazetteer"
    }
}

/// Read one name per line, skipping blank lines and `#` comments
pub fn read_names_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RedactorError::Configuration(format!(
            "Failed to read names file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_finds_whole_words_only() {
        let analyzer = GazetteerAnalyzer::new(["Ann"]).unwrap();
        let spans = analyzer.analyze("Ann planned an Annual review").await.unwrap();
        assert_eq!(spans, vec![EntitySpan::person(0, 3)]);
    }

    #[tokio::test]
    async fn test_longest_name_wins() {
        let analyzer = GazetteerAnalyzer::new(["Mary", "Mary Ann"]).unwrap();
        let spans = analyzer.analyze("ask Mary Ann or Mary").await.unwrap();
        assert_eq!(
            spans,
            vec![EntitySpan::person(4, 12), EntitySpan::person(16, 20)]
        );
    }

    #[tokio::test]
    async fn test_character_offsets_after_multibyte_text() {
        let analyzer = GazetteerAnalyzer::new(["Zoë", "Ana"]).unwrap();
        let spans = analyzer.analyze("Zoë → Ana").await.unwrap();
        assert_eq!(
            spans,
            vec![EntitySpan::person(0, 3), EntitySpan::person(6, 9)]
        );
    }

    #[tokio::test]
    async fn test_names_are_escaped() {
        let analyzer = GazetteerAnalyzer::new(["J. Doe"]).unwrap();
        assert!(analyzer.analyze("JX Doe").await.unwrap().is_empty());
        assert_eq!(analyzer.analyze("J. Doe").await.unwrap().len(), 1);
    }

    #[test]
    fn test_blank_and_duplicate_names() {
        let analyzer = GazetteerAnalyzer::new(["  ", "Bob", "Bob ", ""]).unwrap();
        assert_eq!(analyzer.name_count(), 1);
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: Vec<String> = Vec::new();
        assert!(GazetteerAnalyzer::new(empty).is_err());
    }

    #[test]
    fn test_read_names_file_missing() {
        let result = read_names_file(Path::new("/nonexistent/names.txt"));
        assert!(matches!(result, Err(RedactorError::Configuration(_))));
    }
}
