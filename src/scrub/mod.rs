//! Pattern scrubber
//!
//! Deterministic, rule-based removal of non-name artifacts: URLs, email
//! addresses, `mailto:` links, Markdown and HTML images, bracketed
//! references and leftover markup. Scrubbing never fails and holds no state.
//!
//! # Examples
//!
//! ```
//! use namescrub::scrub::scrub;
//!
//! let cleaned = scrub("Mail me at jo@example.com or see https://example.com");
//! assert_eq!(cleaned, "Mail me at  or see ");
//! ```

pub mod rules;

pub use rules::ScrubRule;

use regex::Captures;
use serde::Serialize;
use std::borrow::Cow;

/// How many matches a single rule removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    /// Rule that fired
    pub rule: ScrubRule,
    /// Number of matches it replaced
    pub matches: usize,
}

/// Scrub `text` by running every rule in order.
pub fn scrub(text: &str) -> String {
    scrub_with_hits(text).0
}

/// Scrub `text` and report which rules fired.
///
/// Only rules with at least one match appear in the returned hits, in
/// execution order.
pub fn scrub_with_hits(text: &str) -> (String, Vec<RuleHit>) {
    let mut current = Cow::Borrowed(text);
    let mut hits = Vec::new();

    for compiled in rules::compiled_rules() {
        let mut matches = 0usize;
        let replaced = compiled.regex.replace_all(&current, |_: &Captures<'_>| {
            matches += 1;
            compiled.rule.replacement()
        });

        if matches > 0 {
            tracing::trace!(rule = %compiled.rule, matches, "Scrub rule applied");
            current = Cow::Owned(replaced.into_owned());
            hits.push(RuleHit {
                rule: compiled.rule,
                matches,
            });
        }
    }

    (current.into_owned(), hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        let text = "Nothing to remove here, just words.";
        let (out, hits) = scrub_with_hits(text);
        assert_eq!(out, text);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scrub(""), "");
    }

    #[test]
    fn test_url_and_email_scenario() {
        let input =
            "Dr. John Smith's email is john.smith@example.com. Check out https://example.com";
        assert_eq!(scrub(input), "Dr. John Smith's email is . Check out ");
    }

    #[test]
    fn test_trailing_dangling_bracket() {
        assert_eq!(scrub("See reference ["), "See reference ");
    }

    #[test]
    fn test_inner_unclosed_bracket_left_alone() {
        assert_eq!(scrub("a [ b"), "a [ b");
    }

    #[test]
    fn test_markdown_image_removed_whole() {
        assert_eq!(scrub("look ![cat](cat.png) here"), "look  here");
    }

    #[test]
    fn test_markdown_image_with_url_target() {
        // The URL rule runs first and takes the target with its closing
        // parenthesis; the image rule then removes what is left.
        assert_eq!(
            scrub("img ![x](https://cdn.example.com/x.png) end"),
            "img  end"
        );
    }

    #[test]
    fn test_html_and_markup() {
        assert_eq!(
            scrub(r#"<p>Hi <img src="a.png" alt="a"> there</p>"#),
            "Hi  there"
        );
    }

    #[test]
    fn test_mailto_link() {
        assert_eq!(scrub("write <mailto:jo@example.org> today"), "write  today");
        assert_eq!(scrub("mailto:broken-link ok"), " ok");
    }

    #[test]
    fn test_bracket_references() {
        assert_eq!(scrub("As shown [1] and [note]."), "As shown  and .");
    }

    #[test]
    fn test_www_url() {
        assert_eq!(scrub("visit www.example.org today"), "visit  today");
        assert_eq!(scrub("see www.example.org/about now"), "see  now");
    }

    #[test]
    fn test_url_path_and_query_removed() {
        assert_eq!(
            scrub("Visit https://example.com/docs/page?id=7 today"),
            "Visit  today"
        );
        assert_eq!(scrub("x https://a.io/p.png"), "x ");
        assert_eq!(
            scrub("profile: https://social.example/users/jane-doe;v=2 (old)"),
            "profile:  (old)"
        );
    }

    #[test]
    fn test_hits_reported_in_order() {
        let (_, hits) = scrub_with_hits("a@b.io [x] http://x.io a2@b.io");
        let rules: Vec<ScrubRule> = hits.iter().map(|h| h.rule).collect();
        assert_eq!(
            rules,
            vec![
                ScrubRule::SchemeUrl,
                ScrubRule::Email,
                ScrubRule::BracketReference
            ]
        );
        assert_eq!(hits[1].matches, 2);
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        assert_eq!(
            scrub("Zoë wrote to zoe@example.com · café"),
            "Zoë wrote to  · café"
        );
    }
}
