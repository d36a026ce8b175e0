//! # typed-error
//!
//! Error categories and field context layered over `anyhow` cause chains.
//!
//! ## Design Philosophy
//!
//! - **ErrorCategory**: Tag what kind of failure happened (BadRequest, NotFound, ...)
//! - **ErrorContext**: Say which input field was at fault, and why
//! - **Cause chain**: Wrap underlying errors and keep the root reachable
//! - **Text**: An error's message is its chain's message, nothing more
//!
//! ## Usage
//!
//! ```rust
//! use typed_error::{cause, get_error_context, get_type, ErrorCategory};
//!
//! let base = anyhow::anyhow!("disk full");
//! let err = ErrorCategory::BadRequest.wrap(base, "save failed");
//! assert_eq!(get_type(&err), ErrorCategory::BadRequest);
//! assert_eq!(cause(&err).to_string(), "disk full");
//!
//! let err = typed_error::add_error_context(err, "filename", "too long");
//! let err = typed_error::wrap(err, "upload");
//! assert_eq!(get_type(&err), ErrorCategory::BadRequest);
//! assert_eq!(get_error_context(&err).unwrap()["field"], "filename");
//! assert_eq!(err.to_string(), "upload: save failed: disk full");
//! ```
//!
//! ## Principles
//!
//! - Constructors and inspectors never fail
//! - Any error can be inspected; foreign ones report `NoType` and no context
//! - Generic wrapping of a typed error carries category and context forward
//! - Category and context never leak into the message text

mod any;
mod category;
mod context;
mod error;
mod ext;
mod ops;

pub use any::{AnyError, Classify};
pub use category::{ErrorCategory, ParseCategoryError};
pub use context::ErrorContext;
pub use error::TypedError;
pub use ext::ResultExt;
pub use ops::{add_error_context, cause, get_error_context, get_type, new, newf, wrap, wrapf};

/// Result type alias using TypedError
pub type Result<T> = std::result::Result<T, TypedError>;
