//! Result type alias for namescrub

use super::errors::RedactorError;

/// Result type alias for namescrub operations
///
/// # Examples
///
/// ```
/// use namescrub::domain::result::Result;
/// use namescrub::domain::errors::RedactorError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RedactorError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RedactorError>;
