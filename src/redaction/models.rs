//! Entity span data models

use crate::domain::SpanError;
use serde::{Deserialize, Serialize};

/// Text substituted for every redacted person name
pub const PLACEHOLDER: &str = "[NAME REMOVED]";

/// Labels treated as "person" when none are configured.
///
/// `PERSON` is the spaCy/OntoNotes label, `PER` the CoNLL one.
pub const DEFAULT_PERSON_LABELS: &[&str] = &["PERSON", "PER"];

/// A labeled entity occurrence reported by an analyzer
///
/// Offsets count characters (not bytes) over the exact text that was
/// analyzed and describe the half-open range `[start, end)`. They are signed
/// so a negative offset from an analyzer is kept and rejected with the other
/// invalid spans rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Entity kind, e.g. `PERSON`, `ORG`, `GPE`
    pub label: String,
    /// First character of the entity
    pub start: i64,
    /// One past the last character of the entity
    pub end: i64,
}

impl EntitySpan {
    /// Create a new span
    pub fn new(label: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }

    /// Create a span labeled `PERSON`
    pub fn person(start: i64, end: i64) -> Self {
        Self::new("PERSON", start, end)
    }

    /// Length in characters; zero for inverted spans
    pub fn len(&self) -> usize {
        usize::try_from(self.end.saturating_sub(self.start)).unwrap_or(0)
    }

    /// Whether the span covers no characters
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the span against a text of `char_len` characters and return
    /// its character range
    pub fn check_bounds(&self, char_len: usize) -> Result<(usize, usize), SpanError> {
        let (Ok(start), Ok(end)) = (usize::try_from(self.start), usize::try_from(self.end)) else {
            return Err(SpanError::Negative {
                start: self.start,
                end: self.end,
            });
        };
        if start > end {
            return Err(SpanError::Inverted {
                start: self.start,
                end: self.end,
            });
        }
        if end > char_len {
            return Err(SpanError::OutOfBounds {
                start: self.start,
                end: self.end,
                len: char_len,
            });
        }
        Ok((start, end))
    }
}

/// A region of the analyzed text that was replaced by the placeholder
///
/// Holds the plaintext it replaced so the audit log can hash it; this type
/// is not serializable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedName {
    /// First replaced character
    pub start: usize,
    /// One past the last replaced character
    pub end: usize,
    /// Replaced text
    pub original: String,
}

/// Output of one redaction pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redaction {
    /// Rewritten text
    pub text: String,
    /// Replaced regions, in ascending offset order
    pub removed: Vec<RemovedName>,
    /// Person spans that could not be applied
    pub rejected: Vec<SpanError>,
}

impl Redaction {
    /// Number of placeholders inserted
    pub fn names_removed(&self) -> usize {
        self.removed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_span() {
        let span = EntitySpan::person(4, 14);
        assert_eq!(span.label, "PERSON");
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_check_bounds() {
        assert_eq!(EntitySpan::person(0, 5).check_bounds(5), Ok((0, 5)));
        assert_eq!(EntitySpan::person(5, 5).check_bounds(5), Ok((5, 5)));
        assert_eq!(
            EntitySpan::person(3, 6).check_bounds(5),
            Err(SpanError::OutOfBounds {
                start: 3,
                end: 6,
                len: 5
            })
        );
        assert_eq!(
            EntitySpan::person(4, 2).check_bounds(5),
            Err(SpanError::Inverted { start: 4, end: 2 })
        );
    }

    #[test]
    fn test_negative_offsets_rejected() {
        assert_eq!(
            EntitySpan::person(-1, 3).check_bounds(5),
            Err(SpanError::Negative { start: -1, end: 3 })
        );
        assert_eq!(
            EntitySpan::person(2, -4).check_bounds(5),
            Err(SpanError::Negative { start: 2, end: -4 })
        );
    }

    #[test]
    fn test_inverted_span_has_zero_len() {
        assert_eq!(EntitySpan::person(9, 3).len(), 0);
    }

    #[test]
    fn test_span_deserializes_from_service_json() {
        let span: EntitySpan =
            serde_json::from_str(r#"{"label":"PERSON","start":0,"end":5,"score":0.98}"#).unwrap();
        assert_eq!(span, EntitySpan::person(0, 5));

        let span: EntitySpan =
            serde_json::from_str(r#"{"label":"PERSON","start":-1,"end":3}"#).unwrap();
        assert_eq!(span.start, -1);
    }
}
