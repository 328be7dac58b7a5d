//! Size-reduction metrics for the scrubbing pass

use serde::{Deserialize, Serialize};
use std::fmt;

/// Word counts before and after scrubbing
///
/// Measured on the scrubbed text, not the final redacted text. Name
/// replacement does not show up here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionMetrics {
    /// Whitespace-delimited tokens in the input
    pub original_words: usize,
    /// Whitespace-delimited tokens after scrubbing
    pub scrubbed_words: usize,
    /// `100 * (1 - scrubbed / original)`, or `0` for empty input
    pub reduction_pct: f64,
}

impl ReductionMetrics {
    /// Compare `original` with its scrubbed form
    pub fn compute(original: &str, scrubbed: &str) -> Self {
        Self::from_counts(word_count(original), word_count(scrubbed))
    }

    /// Build metrics from precomputed word counts
    pub fn from_counts(original_words: usize, scrubbed_words: usize) -> Self {
        let reduction_pct = if original_words == 0 {
            0.0
        } else {
            100.0 * (1.0 - scrubbed_words as f64 / original_words as f64)
        };

        Self {
            original_words,
            scrubbed_words,
            reduction_pct,
        }
    }

    /// Tokens removed by scrubbing
    pub fn words_removed(&self) -> usize {
        self.original_words.saturating_sub(self.scrubbed_words)
    }
}

impl fmt::Display for ReductionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} words ({:.2}% reduction)",
            self.original_words, self.scrubbed_words, self.reduction_pct
        )
    }
}

/// Number of whitespace-delimited tokens in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0, "0.00" ; "empty input")]
    #[test_case(10, 10, "0.00" ; "nothing removed")]
    #[test_case(10, 5, "50.00" ; "half removed")]
    #[test_case(3, 0, "100.00" ; "everything removed")]
    #[test_case(3, 2, "33.33" ; "rounded to two places")]
    fn test_reduction_pct(original: usize, scrubbed: usize, expected: &str) {
        let metrics = ReductionMetrics::from_counts(original, scrubbed);
        assert_eq!(format!("{:.2}", metrics.reduction_pct), expected);
    }

    #[test]
    fn test_zero_words_is_not_nan() {
        let metrics = ReductionMetrics::compute("", "");
        assert_eq!(metrics.original_words, 0);
        assert_eq!(metrics.scrubbed_words, 0);
        assert_eq!(metrics.reduction_pct, 0.0);
    }

    #[test]
    fn test_word_count_uses_any_whitespace() {
        assert_eq!(word_count("  one\ttwo\nthree   four "), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_compute_from_text() {
        let metrics = ReductionMetrics::compute(
            "see https://example.com and mail a@b.io now",
            "see  and mail  now",
        );
        assert_eq!(metrics.original_words, 6);
        assert_eq!(metrics.scrubbed_words, 4);
        assert_eq!(metrics.words_removed(), 2);
    }

    #[test]
    fn test_display() {
        let metrics = ReductionMetrics::from_counts(10, 5);
        assert_eq!(metrics.to_string(), "10 -> 5 words (50.00% reduction)");
    }
}
