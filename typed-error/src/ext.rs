//! Extension methods for annotating errors at `?` call sites

use crate::{ops, AnyError, ErrorCategory, TypedError};

/// Classify and annotate the error side of a `Result`.
///
/// ```rust
/// use typed_error::{get_type, ErrorCategory, ResultExt};
///
/// fn load(id: &str) -> typed_error::Result<u64> {
///     let parsed = id
///         .parse::<u64>()
///         .map_err(typed_error::AnyError::foreign)
///         .with_error_context("id", "must be a number")?;
///     Ok(parsed)
/// }
///
/// let err = load("abc").unwrap_err();
/// assert_eq!(get_type(&err), ErrorCategory::NoType);
/// assert_eq!(err.context().unwrap().field, "id");
///
/// let read = std::fs::read("/nonexistent/typed-error").wrap_err("read settings");
/// assert!(read.unwrap_err().to_string().starts_with("read settings: "));
/// ```
pub trait ResultExt<T> {
    /// Wrap the error with a message, keeping a typed error's category
    fn wrap_err(self, message: impl Into<String>) -> Result<T, TypedError>;

    /// Wrap the error with a message under the given category
    fn wrap_err_as(self, category: ErrorCategory, message: impl Into<String>) -> Result<T, TypedError>;

    /// Attach a field context to the error
    fn with_error_context(self, field: impl Into<String>, message: impl Into<String>) -> Result<T, TypedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AnyError>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T, TypedError> {
        self.map_err(|err| ops::wrap(err, message))
    }

    fn wrap_err_as(self, category: ErrorCategory, message: impl Into<String>) -> Result<T, TypedError> {
        self.map_err(|err| category.wrap(err, message))
    }

    fn with_error_context(self, field: impl Into<String>, message: impl Into<String>) -> Result<T, TypedError> {
        self.map_err(|err| ops::add_error_context(err, field, message))
    }
}
