//! Domain model for the edit workflow.
//!
//! Everything here is free of I/O: capability flags, lifecycle state, form
//! values and errors, navigation intents, notifications, and persisted
//! records with their provenance.

mod capability;
mod error;
mod form;
mod lifecycle;
mod navigation;
mod notification;
mod record;
mod resource;

pub use capability::Capabilities;
pub use error::FormError;
pub use form::{FieldErrors, FieldKind, FieldSpec, FormState, FormValues};
pub use lifecycle::{Lifecycle, WorkflowMode};
pub use navigation::NavigationIntent;
pub use notification::{Notification, NotificationKind};
pub use record::{ActorRef, Provenance, Record, WorkflowInstanceId};
pub use resource::Resource;
