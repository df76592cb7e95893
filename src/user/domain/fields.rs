//! Editable user fields and the user resource descriptor.

use super::{UserDomainError, UserId, UserRole};
use crate::user::schema::UserSchema;
use crate::workflow::domain::{Record, Resource};
use serde::{Deserialize, Serialize};

/// Validated, user-editable account fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    name: String,
    email: String,
    role: UserRole,
}

impl UserFields {
    /// Creates user fields.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyName`] for a blank name or
    /// [`UserDomainError::InvalidEmail`] when the address lacks an `@`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, UserDomainError> {
        let raw_name = name.into();
        if raw_name.trim().is_empty() {
            return Err(UserDomainError::EmptyName);
        }
        let raw_email = email.into();
        if !raw_email.contains('@') {
            return Err(UserDomainError::InvalidEmail(raw_email));
        }
        Ok(Self {
            name: raw_name,
            email: raw_email,
            role,
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the e-mail address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }
}

/// Resource descriptor for staff users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserResource;

impl Resource for UserResource {
    type Id = UserId;
    type Fields = UserFields;
    type Schema = UserSchema;

    const LABEL: &'static str = "User";
    const ROUTE: &'static str = "users";
}

/// A persisted staff user.
pub type User = Record<UserResource>;
