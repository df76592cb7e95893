//! Error types for user domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyId,

    /// The display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// The e-mail address has no `@` separator.
    #[error("invalid e-mail address '{0}'")]
    InvalidEmail(String),
}

/// Error returned while parsing user roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseUserRoleError(pub String);
