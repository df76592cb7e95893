//! Outcomes of workflow actions.

use crate::workflow::{domain::FieldErrors, ports::GatewayError};
use thiserror::Error;

/// Why an action is not offered right now.
///
/// Unavailable actions are no-ops at the UI boundary: the presentation
/// surface hides or disables them, and invoking them anyway changes nothing.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum Unavailable {
    /// The actor lacks the capability for this action.
    #[error("action is not permitted")]
    NotPermitted,
    /// Another save or delete is still in flight.
    #[error("another action is in progress")]
    Busy,
    /// The action needs an existing record.
    #[error("action requires an existing record")]
    CreationMode,
    /// The confirmation was issued for a different record.
    #[error("confirmation does not match the edited record")]
    StaleConfirmation,
}

/// Result of [`EditWorkflow::save`](super::EditWorkflow::save).
#[derive(Debug, Clone)]
pub enum SaveOutcome<Id> {
    /// Nothing happened; the action was not offered.
    Unavailable(Unavailable),
    /// The draft failed validation; no gateway call was made.
    Rejected(FieldErrors),
    /// A new record was created with this identity.
    Created(Id),
    /// The existing record was updated.
    Updated,
    /// The gateway call failed; the draft is preserved.
    Failed(GatewayError),
}

impl<Id> SaveOutcome<Id> {
    /// Returns `true` when the gateway call succeeded.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated)
    }
}

/// Result of [`EditWorkflow::confirm_delete`](super::EditWorkflow::confirm_delete).
#[derive(Debug, Clone)]
pub enum DeleteOutcome {
    /// Nothing happened; the action was not offered.
    Unavailable(Unavailable),
    /// The record was deleted.
    Deleted,
    /// The gateway call failed.
    Failed(GatewayError),
}

impl DeleteOutcome {
    /// Returns `true` when the record was deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}
