//! Lifecycle and mode of a single workflow instance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// In-flight status of a workflow instance.
///
/// Saving and deleting are transient and mutually exclusive; while either is
/// active neither action may be triggered again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// No gateway call is in flight.
    #[default]
    Idle,
    /// A create or update call is in flight.
    Saving,
    /// A delete call is in flight.
    Deleting,
}

impl Lifecycle {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Saving => "saving",
            Self::Deleting => "deleting",
        }
    }

    /// Returns `true` when no gateway call is in flight.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while a save is in flight.
    #[must_use]
    pub const fn is_saving(self) -> bool {
        matches!(self, Self::Saving)
    }

    /// Returns `true` while a delete is in flight.
    #[must_use]
    pub const fn is_deleting(self) -> bool {
        matches!(self, Self::Deleting)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the workflow edits an existing record or creates a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkflowMode<Id> {
    /// No identity exists yet; saving creates the record.
    Create,
    /// The record with this identity is being edited.
    Edit(Id),
}

impl<Id> WorkflowMode<Id> {
    /// Returns the identity in edit mode.
    #[must_use]
    pub const fn id(&self) -> Option<&Id> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    /// Returns `true` in creation mode.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self, Self::Create)
    }
}
