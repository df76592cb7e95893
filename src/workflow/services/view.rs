//! Read-only snapshots consumed by the presentation surface.

use crate::workflow::domain::{Capabilities, FieldSpec, Lifecycle, Provenance, WorkflowMode};

/// One field binding: descriptor, current draft value, and the error from
/// the last submission. The setter half is
/// [`EditWorkflow::set_field`](super::EditWorkflow::set_field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    spec: FieldSpec,
    value: String,
    error: Option<String>,
}

impl FieldView {
    pub(super) const fn new(spec: FieldSpec, value: String, error: Option<String>) -> Self {
        Self { spec, value, error }
    }

    /// Returns the field descriptor.
    #[must_use]
    pub const fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    /// Returns the field key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// Returns the draft value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Everything a presentation surface needs to render one edit screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowView<Id> {
    /// Creation or edit mode.
    pub mode: WorkflowMode<Id>,
    /// Current in-flight status.
    pub lifecycle: Lifecycle,
    /// Field bindings in schema order.
    pub fields: Vec<FieldView>,
    /// Capability flags the workflow was opened with.
    pub capabilities: Capabilities,
    /// Whether the Save button is enabled.
    pub can_save: bool,
    /// Whether the Delete button is enabled.
    pub can_delete: bool,
    /// Whether the "new" shortcut is shown.
    pub can_navigate_new: bool,
    /// Read-only provenance of the edited record.
    pub provenance: Option<Provenance>,
}
