//! Field context attached to an error

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which input field caused an error, and why.
///
/// An error carries at most one context. The default value (empty field and
/// message) means no context was attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending field
    pub field: String,
    /// Why the field was rejected
    pub message: String,
}

impl ErrorContext {
    /// Create a context for a field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True when neither field nor message is set
    pub fn is_empty(&self) -> bool {
        self.field.is_empty() && self.message.is_empty()
    }

    /// Render as a `{"field", "message"}` map
    pub fn to_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("field".to_string(), self.field.clone()),
            ("message".to_string(), self.message.clone()),
        ])
    }
}
