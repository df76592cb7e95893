//! Application services for the edit workflow.

mod confirmation;
mod controller;
mod outcome;
mod view;

pub use confirmation::DeleteConfirmation;
pub use controller::{EditWorkflow, WorkflowPorts};
pub use outcome::{DeleteOutcome, SaveOutcome, Unavailable};
pub use view::{FieldView, WorkflowView};
