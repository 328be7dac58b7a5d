//! Person-name redaction
//!
//! This module replaces person names in text with a fixed placeholder. It
//! does not detect names itself: an injected [`TextAnalyzer`] reports
//! labeled spans and the redactor rewrites every person span.
//!
//! # Architecture
//!
//! - **Analyzer**: the entity-recognition capability ([`analyzer`])
//! - **Models**: entity spans and redaction output ([`models`])
//! - **Rewrite**: right-to-left span replacement ([`rewrite`])
//! - **Redactor**: person filtering and analyzer orchestration ([`redactor`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use namescrub::redaction::{GazetteerAnalyzer, NameRedactor};
//!
//! # async fn example() -> namescrub::domain::Result<()> {
//! let analyzer = GazetteerAnalyzer::new(["John Smith"])?;
//! let redaction = NameRedactor::new()
//!     .redact("Dr. John Smith called", &analyzer)
//!     .await?;
//! assert_eq!(redaction.text, "Dr. [NAME REMOVED] called");
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod models;
pub mod redactor;
pub mod rewrite;

// Re-export main types
pub use analyzer::{create_analyzer, GazetteerAnalyzer, HttpAnalyzer, TextAnalyzer};
pub use models::{EntitySpan, Redaction, RemovedName, DEFAULT_PERSON_LABELS, PLACEHOLDER};
pub use redactor::NameRedactor;
pub use rewrite::replace_spans;
