//! Domain types shared across the crate.
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T, RedactorError>`]:
//!
//! ```rust
//! use namescrub::domain::{RedactorError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are converted using the ? operator
//!     let config = namescrub::config::load_config("namescrub.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

pub use errors::{AnalyzerError, RedactorError, SpanError};
pub use result::Result;
