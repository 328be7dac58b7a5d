// namescrub - Person-name and web-artifact redaction for free text
// Copyright (c) 2025 Namescrub Contributors
// Licensed under the MIT License

//! # namescrub
//!
//! namescrub cleans free-form text in two stages:
//!
//! 1. a **pattern scrubber** deletes URLs, e-mail addresses, `mailto:` links,
//!    Markdown and HTML images, bracketed references and leftover markup
//! 2. an **entity redactor** replaces every person name reported by a
//!    named-entity recognizer with `[NAME REMOVED]`
//!
//! The recognizer is injected through the [`redaction::TextAnalyzer`] trait.
//! An HTTP client for an external NER service and an offline name-list
//! analyzer ship with the crate.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`pipeline`] - Scrub, measure and redact one text
//! - [`scrub`] - Ordered regular-expression rules
//! - [`redaction`] - Entity spans, analyzers and right-to-left rewriting
//! - [`audit`] - Append-only audit log with hashed names
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use namescrub::config::load_config;
//! use namescrub::pipeline::RedactionPipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("namescrub.toml")?;
//!     let pipeline = RedactionPipeline::from_config(&config)?;
//!
//!     let result = pipeline
//!         .process("Contact John Smith at john@example.com")
//!         .await?;
//!
//!     println!("{}", result.text);
//!     if let Some(metrics) = result.metrics {
//!         println!("{metrics}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scrubbing only
//!
//! ```rust
//! let cleaned = namescrub::scrub::scrub("![logo](https://x.io/l.png) Hello [1]");
//! assert_eq!(cleaned, " Hello ");
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`]. An analyzer failure or
//! timeout is always an error; the pipeline never hands back text that
//! skipped name redaction.

pub mod audit;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod pipeline;
pub mod redaction;
pub mod scrub;
