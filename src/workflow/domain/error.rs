//! Error types for form manipulation.

use thiserror::Error;

/// Errors returned while writing draft values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// The schema declares no field with this name.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}
