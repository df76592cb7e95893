//! Resource descriptor shared by every edit screen.

use crate::workflow::ports::FormSchema;
use std::fmt;
use std::hash::Hash;

/// Describes one editable resource type (tasks, users, ...).
///
/// A resource binds together the identity type assigned by the backing
/// store, the validated editable fields, and the schema that turns raw form
/// values into those fields. The workflow controller is generic over this
/// trait so that each resource screen reuses the same state machine.
pub trait Resource: Send + Sync + 'static {
    /// Server-assigned identity.
    type Id: Clone + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync;

    /// Validated editable fields.
    type Fields: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Validation schema producing [`Self::Fields`].
    type Schema: FormSchema<Output = Self::Fields>;

    /// Human-readable singular label, for example `Task`.
    const LABEL: &'static str;

    /// Route segment for the collection, for example `tasks`.
    const ROUTE: &'static str;
}
