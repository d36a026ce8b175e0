//! Error categories

use crate::{AnyError, ErrorContext, TypedError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of an error.
///
/// Categories are coarse tags for branching logic, e.g. deciding which
/// response code a failed request maps to. They carry no behavior of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Unclassified error
    #[default]
    NoType,

    /// The caller sent something invalid
    BadRequest,

    /// The requested entity does not exist
    NotFound,

    /// The caller is not allowed to do this
    AccessDenied,
}

impl ErrorCategory {
    /// Every category, `NoType` first
    pub const ALL: [ErrorCategory; 4] = [
        ErrorCategory::NoType,
        ErrorCategory::BadRequest,
        ErrorCategory::NotFound,
        ErrorCategory::AccessDenied,
    ];

    /// Returns the category as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NoType => "NoType",
            ErrorCategory::BadRequest => "BadRequest",
            ErrorCategory::NotFound => "NotFound",
            ErrorCategory::AccessDenied => "AccessDenied",
        }
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an error of this category from a message.
    ///
    /// Called on a category value (`ErrorCategory::NotFound.new(..)`), it
    /// builds a `TypedError` rather than a category.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(self, message: impl Into<String>) -> TypedError {
        TypedError::from_parts(self, anyhow::Error::msg(message.into()), ErrorContext::default())
    }

    /// Create an error of this category from a formatted message
    ///
    /// ```rust
    /// use typed_error::ErrorCategory;
    ///
    /// let err = ErrorCategory::NotFound.newf(format_args!("user {} missing", 42));
    /// assert_eq!(err.to_string(), "user 42 missing");
    /// ```
    pub fn newf(self, args: fmt::Arguments<'_>) -> TypedError {
        self.new(args.to_string())
    }

    /// Wrap `err` with a message, tagging the result with this category.
    ///
    /// The category of `err` (if it had one) is replaced, and its context is
    /// dropped.
    pub fn wrap(self, err: impl Into<AnyError>, message: impl Into<String>) -> TypedError {
        let err: AnyError = err.into();
        let message: String = message.into();
        let chain = err.into_chain().context(message);
        TypedError::from_parts(self, chain, ErrorContext::default())
    }

    /// Wrap `err` with a formatted message, tagging the result with this category
    pub fn wrapf(self, err: impl Into<AnyError>, args: fmt::Arguments<'_>) -> TypedError {
        self.wrap(err, args.to_string())
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCategoryError {
    #[error("unknown error category: {0}")]
    Unknown(String),
}

impl FromStr for ErrorCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError::Unknown(s.to_string()))
    }
}
