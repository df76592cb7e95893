//! Persisted records and their read-only provenance.

use super::Resource;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Reference to the staff member who performed a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorRef(String);

impl ActorRef {
    /// Wraps an actor identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the actor identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one open workflow instance, used to correlate log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowInstanceId(Uuid);

impl WorkflowInstanceId {
    /// Creates a new random instance identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WorkflowInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkflowInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-stamped creation and modification metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: ActorRef,
    updated_by: ActorRef,
}

impl Provenance {
    /// Stamps a freshly created record.
    #[must_use]
    pub fn created(actor: &ActorRef, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            created_at: timestamp,
            updated_at: timestamp,
            created_by: actor.clone(),
            updated_by: actor.clone(),
        }
    }

    /// Stamps a modification, keeping the creation metadata.
    pub fn touch(&mut self, actor: &ActorRef, clock: &impl Clock) {
        self.updated_at = clock.utc();
        self.updated_by = actor.clone();
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> &ActorRef {
        &self.created_by
    }

    /// Returns the latest modifier.
    #[must_use]
    pub const fn updated_by(&self) -> &ActorRef {
        &self.updated_by
    }
}

/// A persisted record of resource `R`.
///
/// `Clone`, `PartialEq`, and `Debug` are bounded on the record's identity
/// and fields, so resource marker types need not implement them.
pub struct Record<R: Resource> {
    id: R::Id,
    fields: R::Fields,
    provenance: Provenance,
}

impl<R: Resource> Clone for Record<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            fields: self.fields.clone(),
            provenance: self.provenance.clone(),
        }
    }
}

impl<R: Resource> PartialEq for Record<R> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.fields == other.fields && self.provenance == other.provenance
    }
}

impl<R: Resource> fmt::Debug for Record<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("id", &self.id)
            .field("fields", &self.fields)
            .field("provenance", &self.provenance)
            .finish()
    }
}

impl<R: Resource> Record<R> {
    /// Assembles a record as loaded from the backing store.
    #[must_use]
    pub const fn new(id: R::Id, fields: R::Fields, provenance: Provenance) -> Self {
        Self {
            id,
            fields,
            provenance,
        }
    }

    /// Returns the record identity.
    #[must_use]
    pub const fn id(&self) -> &R::Id {
        &self.id
    }

    /// Returns the editable fields.
    #[must_use]
    pub const fn fields(&self) -> &R::Fields {
        &self.fields
    }

    /// Returns the provenance metadata.
    #[must_use]
    pub const fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Replaces the editable fields and stamps the modification.
    pub fn revise(&mut self, fields: R::Fields, actor: &ActorRef, clock: &impl Clock) {
        self.fields = fields;
        self.provenance.touch(actor, clock);
    }
}
