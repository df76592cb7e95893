//! Two-step confirmation for destructive actions.

use crate::workflow::domain::Resource;
use std::fmt;

/// Proof that the user was asked to confirm a delete.
///
/// Only [`EditWorkflow::request_delete`] hands these out and only
/// [`EditWorkflow::confirm_delete`] consumes them, so the gateway is never
/// called without an explicit confirmation step. Cancelling (or dropping the
/// token) leaves the workflow untouched.
///
/// [`EditWorkflow::request_delete`]: super::EditWorkflow::request_delete
/// [`EditWorkflow::confirm_delete`]: super::EditWorkflow::confirm_delete
#[must_use = "a delete only happens when the confirmation is passed to `confirm_delete`"]
pub struct DeleteConfirmation<R: Resource> {
    id: R::Id,
    prompt: String,
}

impl<R: Resource> fmt::Debug for DeleteConfirmation<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteConfirmation")
            .field("id", &self.id)
            .field("prompt", &self.prompt)
            .finish()
    }
}

impl<R: Resource> DeleteConfirmation<R> {
    pub(super) fn new(id: R::Id) -> Self {
        let prompt = format!(
            "Delete {} {id}? This cannot be undone.",
            R::LABEL.to_lowercase()
        );
        Self { id, prompt }
    }

    /// Returns the identity of the record to delete.
    #[must_use]
    pub const fn id(&self) -> &R::Id {
        &self.id
    }

    /// Returns the question to show in the confirmation dialog.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Dismisses the dialog without deleting anything.
    pub fn cancel(self) {
        drop(self);
    }
}
