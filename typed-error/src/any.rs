//! Typed-or-foreign error input and the `Classify` capability

use crate::{ErrorCategory, ErrorContext, TypedError};
use std::fmt;

/// Any error an operation may receive: one of ours, or a foreign one.
///
/// Operations that treat typed errors specially (generic wrap, context
/// annotation) match on this instead of inspecting types at runtime. A
/// `TypedError` erased into an `anyhow::Error` is foreign.
pub enum AnyError {
    /// An error built by this crate, with category and context
    Typed(TypedError),

    /// Any other error, carried as its cause chain
    Foreign(anyhow::Error),
}

impl AnyError {
    /// Adapt any standard error as a foreign error
    pub fn foreign<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        AnyError::Foreign(anyhow::Error::new(err))
    }

    /// The cause chain, without category or context
    pub fn into_chain(self) -> anyhow::Error {
        match self {
            AnyError::Typed(err) => err.into_chain(),
            AnyError::Foreign(err) => err,
        }
    }
}

impl From<TypedError> for AnyError {
    fn from(err: TypedError) -> Self {
        AnyError::Typed(err)
    }
}

impl From<anyhow::Error> for AnyError {
    fn from(err: anyhow::Error) -> Self {
        AnyError::Foreign(err)
    }
}

impl From<std::io::Error> for AnyError {
    fn from(err: std::io::Error) -> Self {
        AnyError::foreign(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync + 'static>> for AnyError {
    fn from(err: Box<dyn std::error::Error + Send + Sync + 'static>) -> Self {
        AnyError::Foreign(anyhow::anyhow!(err))
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyError::Typed(err) => fmt::Display::fmt(err, f),
            AnyError::Foreign(err) => write!(f, "{:#}", err),
        }
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyError::Typed(err) => fmt::Debug::fmt(err, f),
            AnyError::Foreign(err) => fmt::Debug::fmt(err, f),
        }
    }
}

/// Read-only view of an error's category, context and root cause.
///
/// Implemented for typed and foreign errors alike, so that any error can be
/// inspected. Every method is total.
pub trait Classify {
    /// The category, `NoType` for foreign errors
    fn category(&self) -> ErrorCategory;

    /// The stored context, `None` for foreign errors
    fn error_context(&self) -> Option<&ErrorContext>;

    /// The innermost error of the chain
    fn root_cause(&self) -> &(dyn std::error::Error + 'static);
}

impl Classify for TypedError {
    fn category(&self) -> ErrorCategory {
        TypedError::category(self)
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        Some(self.raw_context())
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        TypedError::root_cause(self)
    }
}

impl Classify for anyhow::Error {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::NoType
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        None
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        anyhow::Error::root_cause(self)
    }
}

/// Follow `source()` to the last link
fn walk_to_root<'a>(mut err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
    while let Some(next) = err.source() {
        err = next;
    }
    err
}

impl Classify for dyn std::error::Error + 'static {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::NoType
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        None
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        walk_to_root(self)
    }
}

impl Classify for dyn std::error::Error + Send + Sync + 'static {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::NoType
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        None
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        walk_to_root(self)
    }
}

impl Classify for std::io::Error {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::NoType
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        None
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        walk_to_root(self)
    }
}

impl Classify for AnyError {
    fn category(&self) -> ErrorCategory {
        match self {
            AnyError::Typed(err) => Classify::category(err),
            AnyError::Foreign(err) => Classify::category(err),
        }
    }

    fn error_context(&self) -> Option<&ErrorContext> {
        match self {
            AnyError::Typed(err) => err.error_context(),
            AnyError::Foreign(err) => err.error_context(),
        }
    }

    fn root_cause(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            AnyError::Typed(err) => Classify::root_cause(err),
            AnyError::Foreign(err) => Classify::root_cause(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_foreign_defaults() {
        let err = AnyError::foreign(io::Error::new(io::ErrorKind::Other, "raw"));
        assert_eq!(err.category(), ErrorCategory::NoType);
        assert!(err.error_context().is_none());
        assert_eq!(err.root_cause().to_string(), "raw");
        assert_eq!(err.to_string(), "raw");
    }

    #[test]
    fn test_typed_dispatch() {
        let err = AnyError::from(ErrorCategory::NotFound.new("gone").with_error_context("id", "unknown"));
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.error_context(), Some(&ErrorContext::new("id", "unknown")));
        assert_eq!(err.root_cause().to_string(), "gone");
    }

    #[test]
    fn test_erased_typed_error_is_foreign() {
        let erased = anyhow::Error::from(ErrorCategory::AccessDenied.new("denied"));
        let err = AnyError::from(erased);
        assert_eq!(err.category(), ErrorCategory::NoType);
        assert!(err.error_context().is_none());
    }

    #[test]
    fn test_dyn_error_walks_sources() {
        let chain = anyhow::Error::msg("root").context("middle").context("top");
        let boxed: Box<dyn std::error::Error + Send + Sync + 'static> = chain.into();

        assert_eq!(boxed.category(), ErrorCategory::NoType);
        assert!(boxed.error_context().is_none());
        assert_eq!(Classify::root_cause(&*boxed).to_string(), "root");

        let plain: &(dyn std::error::Error + 'static) = &*boxed;
        assert_eq!(plain.category(), ErrorCategory::NoType);
        assert_eq!(Classify::root_cause(plain).to_string(), "root");
    }

    #[test]
    fn test_erased_typed_dyn_is_foreign() {
        let boxed: Box<dyn std::error::Error + Send + Sync + 'static> =
            Box::new(ErrorCategory::AccessDenied.new("denied"));
        assert_eq!(boxed.category(), ErrorCategory::NoType);
        assert_eq!(Classify::root_cause(&*boxed).to_string(), "denied");
    }

    #[test]
    fn test_io_and_boxed_conversions_are_foreign() {
        let err = AnyError::from(io::Error::new(io::ErrorKind::NotFound, "no file"));
        assert_eq!(err.category(), ErrorCategory::NoType);
        assert_eq!(err.to_string(), "no file");

        let boxed: Box<dyn std::error::Error + Send + Sync + 'static> = "bad header".into();
        let err = AnyError::from(boxed);
        assert_eq!(err.category(), ErrorCategory::NoType);
        assert_eq!(err.root_cause().to_string(), "bad header");
    }

    #[test]
    fn test_into_chain() {
        let chain = AnyError::from(ErrorCategory::BadRequest.new("inner").wrap("outer")).into_chain();
        assert_eq!(format!("{:#}", chain), "outer: inner");
    }

    #[test]
    fn test_foreign_display_renders_chain() {
        let chain = anyhow::Error::msg("disk full").context("save failed");
        assert_eq!(AnyError::from(chain).to_string(), "save failed: disk full");
    }
}
