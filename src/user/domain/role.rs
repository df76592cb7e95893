//! Staff role enumeration.

use super::ParseUserRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Console role of a staff member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Regular staff member.
    #[default]
    Staff,
    /// Administrator.
    Admin,
    /// Read-only access.
    Viewer,
}

impl UserRole {
    /// Every role, in display order.
    pub const ALL: [Self; 3] = [Self::Staff, Self::Admin, Self::Viewer];

    /// Canonical names of every role, in display order.
    pub const NAMES: &'static [&'static str] = &["Staff", "Admin", "Viewer"];

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Staff => "Staff",
            Self::Admin => "Admin",
            Self::Viewer => "Viewer",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| ParseUserRoleError(value.to_owned()))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
