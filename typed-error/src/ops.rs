//! Category-less constructors and the inspection helpers.
//!
//! Constructors here produce `NoType` errors, except that wrapping an error
//! that is already typed carries its category and context forward.

use crate::{AnyError, Classify, ErrorCategory, ErrorContext, TypedError};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Constructors
// =============================================================================

/// Create an unclassified error
pub fn new(message: impl Into<String>) -> TypedError {
    ErrorCategory::NoType.new(message)
}

/// Create an unclassified error from a formatted message
pub fn newf(args: fmt::Arguments<'_>) -> TypedError {
    ErrorCategory::NoType.newf(args)
}

/// Wrap an error with a message.
///
/// A typed `err` keeps its category and context; a foreign one becomes
/// `NoType`.
pub fn wrap(err: impl Into<AnyError>, message: impl Into<String>) -> TypedError {
    let err: AnyError = err.into();
    let message: String = message.into();
    match err {
        AnyError::Typed(err) => err.wrap(message),
        AnyError::Foreign(err) => {
            TypedError::from_parts(ErrorCategory::NoType, err.context(message), ErrorContext::default())
        }
    }
}

/// Wrap an error with a formatted message
pub fn wrapf(err: impl Into<AnyError>, args: fmt::Arguments<'_>) -> TypedError {
    wrap(err, args.to_string())
}

/// Attach a field context to an error, replacing any previous one.
///
/// A foreign `err` becomes the unchanged cause of a new `NoType` error.
pub fn add_error_context(
    err: impl Into<AnyError>,
    field: impl Into<String>,
    message: impl Into<String>,
) -> TypedError {
    let err: AnyError = err.into();
    match err {
        AnyError::Typed(err) => err.with_error_context(field, message),
        AnyError::Foreign(err) => {
            TypedError::from_parts(ErrorCategory::NoType, err, ErrorContext::new(field, message))
        }
    }
}

// =============================================================================
// Inspection
// =============================================================================

/// The category of any error, `NoType` if it is not typed
pub fn get_type<E: Classify + ?Sized>(err: &E) -> ErrorCategory {
    err.category()
}

/// The context of a typed error as a `{"field", "message"}` map.
///
/// Every typed error yields a map, with empty values if no context was
/// attached. Foreign errors yield `None`.
pub fn get_error_context<E: Classify + ?Sized>(err: &E) -> Option<HashMap<String, String>> {
    err.error_context().map(ErrorContext::to_map)
}

/// The innermost error beneath all wrapping
pub fn cause<E: Classify + ?Sized>(err: &E) -> &(dyn std::error::Error + 'static) {
    err.root_cause()
}
