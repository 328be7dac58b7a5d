//! Ordered rule table for the pattern scrubber
//!
//! Each [`ScrubRule`] is one named rewrite step. Rules run strictly in
//! [`ScrubRule::ORDERED`] order and every rule sees the output of the one
//! before it. Several rules are only correct because an earlier rule already
//! removed an enclosing construct; those dependencies are declared through
//! [`ScrubRule::requires`] and checked at compile time.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// Characters a bare URL may contain after its scheme or `www.` prefix,
/// plus `%XX` escapes.
///
/// `$-_` is the range `0x24..=0x5F`, which covers digits, upper-case
/// letters and `/ : ; = ? %` among others, so paths and query strings go
/// with the host. It also covers `' ) < > [ ]`.
macro_rules! url_body {
    () => {
        r"(?:[a-zA-Z0-9]|[$-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+"
    };
}

/// Local part, domain segments and TLD of an email address.
macro_rules! email_address {
    () => {
        r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9\-]+(?:\.[a-zA-Z0-9\-]+)*\.[a-zA-Z]{2,}"
    };
}

/// A single named rewrite step of the scrubber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrubRule {
    /// `http://` and `https://` URLs
    SchemeUrl,
    /// Scheme-less URLs starting with `www.`
    WwwUrl,
    /// Markdown images, `![alt](url)`, or `![alt](` when a URL rule
    /// already took the target and its closing parenthesis
    MarkdownImage,
    /// Opening HTML `<img ...>` tags
    HtmlImage,
    /// `local@domain.tld` addresses
    Email,
    /// `mailto:` immediately followed by an address
    MailtoEmail,
    /// Whatever `mailto:` residue the address rules left behind
    MailtoResidue,
    /// Bracketed reference artifacts, `[...]`
    BracketReference,
    /// A lone `[` as the final character of the text
    DanglingBracket,
    /// Any remaining `<...>` markup
    AngleMarkup,
}

impl ScrubRule {
    /// Execution order. Reordering this table is checked against
    /// [`ScrubRule::requires`] when the crate compiles.
    pub const ORDERED: [ScrubRule; 10] = [
        ScrubRule::SchemeUrl,
        ScrubRule::WwwUrl,
        ScrubRule::MarkdownImage,
        ScrubRule::HtmlImage,
        ScrubRule::Email,
        ScrubRule::MailtoEmail,
        ScrubRule::MailtoResidue,
        ScrubRule::BracketReference,
        ScrubRule::DanglingBracket,
        ScrubRule::AngleMarkup,
    ];

    /// Stable name used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::SchemeUrl => "scheme_url",
            Self::WwwUrl => "www_url",
            Self::MarkdownImage => "markdown_image",
            Self::HtmlImage => "html_image",
            Self::Email => "email",
            Self::MailtoEmail => "mailto_email",
            Self::MailtoResidue => "mailto_residue",
            Self::BracketReference => "bracket_reference",
            Self::DanglingBracket => "dangling_bracket",
            Self::AngleMarkup => "angle_markup",
        }
    }

    /// Regular expression matched by this rule
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::SchemeUrl => concat!(r"https?://", url_body!()),
            Self::WwwUrl => concat!(r"www\.", url_body!()),
            Self::MarkdownImage => r"!\[[^\]]*\]\((?:[^)]*\))?",
            Self::HtmlImage => r"<img.*?>",
            Self::Email => email_address!(),
            Self::MailtoEmail => concat!("mailto:", email_address!()),
            Self::MailtoResidue => r"mailto:[^\s>]*",
            Self::BracketReference => r"\[[^\]]*?\]",
            Self::DanglingBracket => r"\[$",
            Self::AngleMarkup => r"<.*?>",
        }
    }

    /// Text substituted for every match
    pub fn replacement(&self) -> &'static str {
        ""
    }

    /// Rules that must already have run when this one runs.
    ///
    /// - Markdown images go before the generic bracket rule, otherwise the
    ///   alt text is stripped and `!(url)` is left behind. They go after the
    ///   URL rules, which may leave only `![alt](` of an image behind.
    /// - `<img>` tags go before the generic angle-bracket rule.
    /// - The `mailto:` residue rule only sweeps what the address rules missed.
    /// - The dangling bracket rule assumes closed brackets are gone.
    pub const fn requires(&self) -> &'static [ScrubRule] {
        match self {
            Self::SchemeUrl | Self::WwwUrl | Self::HtmlImage | Self::Email => &[],
            Self::MarkdownImage => &[ScrubRule::SchemeUrl, ScrubRule::WwwUrl],
            Self::MailtoEmail => &[ScrubRule::Email],
            Self::MailtoResidue => &[ScrubRule::Email, ScrubRule::MailtoEmail],
            Self::BracketReference => &[ScrubRule::MarkdownImage],
            Self::DanglingBracket => &[ScrubRule::BracketReference],
            Self::AngleMarkup => &[ScrubRule::HtmlImage, ScrubRule::MailtoResidue],
        }
    }
}

impl fmt::Display for ScrubRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn position_of(rule: ScrubRule) -> usize {
    let mut i = 0;
    while i < ScrubRule::ORDERED.len() {
        if ScrubRule::ORDERED[i] as usize == rule as usize {
            return i;
        }
        i += 1;
    }
    usize::MAX
}

const fn order_respects_prerequisites() -> bool {
    let mut i = 0;
    while i < ScrubRule::ORDERED.len() {
        let prerequisites = ScrubRule::ORDERED[i].requires();
        let mut j = 0;
        while j < prerequisites.len() {
            if position_of(prerequisites[j]) >= i {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    order_respects_prerequisites(),
    "a scrub rule is ordered before one of its prerequisites"
);

/// Compiled rule with its regex
#[derive(Debug)]
pub struct CompiledRule {
    /// Which step this is
    pub rule: ScrubRule,
    /// Compiled pattern
    pub regex: Regex,
}

static COMPILED: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    ScrubRule::ORDERED
        .iter()
        .map(|rule| CompiledRule {
            rule: *rule,
            // Built-in patterns; covered by test_all_patterns_compile
            regex: Regex::new(rule.pattern()).expect("built-in scrub pattern must compile"),
        })
        .collect()
});

/// All rules, compiled, in execution order
pub fn compiled_rules() -> &'static [CompiledRule] {
    &COMPILED
}
