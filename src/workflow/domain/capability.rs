//! Capability flags consumed by the workflow.

use serde::{Deserialize, Serialize};

/// Actions the current actor is authorized to perform.
///
/// The flags are resolved by an external policy engine and handed to the
/// workflow at construction time. The workflow only reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    can_create: bool,
    can_update: bool,
    can_delete: bool,
}

impl Capabilities {
    /// Creates a capability set from the three resolved flags.
    #[must_use]
    pub const fn new(can_create: bool, can_update: bool, can_delete: bool) -> Self {
        Self {
            can_create,
            can_update,
            can_delete,
        }
    }

    /// Grants every action.
    #[must_use]
    pub const fn all() -> Self {
        Self::new(true, true, true)
    }

    /// Grants no action.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Returns whether the actor may create records.
    #[must_use]
    pub const fn can_create(self) -> bool {
        self.can_create
    }

    /// Returns whether the actor may update records.
    #[must_use]
    pub const fn can_update(self) -> bool {
        self.can_update
    }

    /// Returns whether the actor may delete records.
    #[must_use]
    pub const fn can_delete(self) -> bool {
        self.can_delete
    }
}
