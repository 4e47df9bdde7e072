//! Validation errors for mutation requests.

use thiserror::Error;

/// A request that is well-formed JSON but not acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    /// A numeric field is below its minimum.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i64 },
}

/// Result type alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
