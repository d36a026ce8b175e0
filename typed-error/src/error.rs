//! The TypedError type

use crate::{ErrorCategory, ErrorContext};
use std::fmt;

/// An error tagged with a category and an optional field context.
///
/// A `TypedError` is made of:
/// - `category`: coarse classification used for branching
/// - `chain`: the underlying `anyhow` cause chain
/// - `context`: at most one `{field, message}` annotation
///
/// Its text is exactly the chain's text. Category and context are only
/// reachable through the accessors.
///
/// # Example
///
/// ```rust
/// use typed_error::{ErrorCategory, ErrorContext};
///
/// let err = ErrorCategory::BadRequest
///     .new("invalid signup form")
///     .with_error_context("email", "missing @")
///     .wrap("signup failed");
///
/// assert_eq!(err.category(), ErrorCategory::BadRequest);
/// assert_eq!(err.context(), Some(&ErrorContext::new("email", "missing @")));
/// assert_eq!(err.to_string(), "signup failed: invalid signup form");
/// ```
pub struct TypedError {
    category: ErrorCategory,
    chain: anyhow::Error,
    context: ErrorContext,
}

impl TypedError {
    pub(crate) fn from_parts(category: ErrorCategory, chain: anyhow::Error, context: ErrorContext) -> Self {
        Self {
            category,
            chain,
            context,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Get the field context, or `None` if none was attached
    pub fn context(&self) -> Option<&ErrorContext> {
        if self.context.is_empty() {
            None
        } else {
            Some(&self.context)
        }
    }

    /// Get the field context as stored, empty or not
    pub fn raw_context(&self) -> &ErrorContext {
        &self.context
    }

    /// Get the underlying cause chain
    pub fn chain(&self) -> &anyhow::Error {
        &self.chain
    }

    /// Give up category and context, keeping only the cause chain
    pub fn into_chain(self) -> anyhow::Error {
        self.chain
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        self.chain.root_cause()
    }

    /// Messages of every link in the chain, outermost first
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.chain.chain().map(|link| link.to_string())
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Replace the category
    pub fn with_category(self, category: ErrorCategory) -> Self {
        Self { category, ..self }
    }

    /// Attach a field context, replacing any previous one
    pub fn with_error_context(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: ErrorContext::new(field, message),
            ..self
        }
    }

    /// Add a message on top of the chain, keeping category and context
    pub fn wrap(self, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            chain: self.chain.context(message),
            ..self
        }
    }
}

// =============================================================================
// Display - the chain's own rendering, nothing else
// =============================================================================

impl fmt::Display for TypedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.chain)
    }
}

// =============================================================================
// Debug - verbose, multi-line format for debugging
// =============================================================================

impl fmt::Debug for TypedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} => {}", self.category, self.chain)?;

        if let Some(context) = self.context() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            writeln!(f, "        field: {}", context.field)?;
            writeln!(f, "        message: {}", context.message)?;
        }

        let mut causes = self.chain.chain().skip(1).peekable();
        if causes.peek().is_some() {
            writeln!(f)?;
            writeln!(f, "    Caused by:")?;
            for (i, cause) in causes.enumerate() {
                writeln!(f, "        {}: {}", i, cause)?;
            }
        }

        Ok(())
    }
}

// Display already renders the whole chain, so no link is handed out as a
// source. `root_cause` and `messages` walk the chain instead.
impl std::error::Error for TypedError {}

impl From<std::io::Error> for TypedError {
    fn from(err: std::io::Error) -> Self {
        let category = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCategory::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCategory::AccessDenied,
            std::io::ErrorKind::InvalidInput | std::io::ErrorKind::InvalidData => ErrorCategory::BadRequest,
            _ => ErrorCategory::NoType,
        };
        Self::from_parts(category, anyhow::Error::from(err), ErrorContext::default())
    }
}
