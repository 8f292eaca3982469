//! Result type alias for the export runner

use super::errors::RunnerError;

/// Result type alias using `RunnerError` as the error type
///
/// # Examples
///
/// ```
/// use export_runner::domain::result::Result;
/// use export_runner::domain::errors::RunnerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RunnerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RunnerError>;
