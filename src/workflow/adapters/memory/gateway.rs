//! In-memory entity gateway for tests and demos.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{ActorRef, Provenance, Record, Resource},
    ports::{EntityGateway, FormSchema, GatewayError, GatewayResult},
};

/// Thread-safe in-memory store behaving like a remote gateway.
///
/// Identities are minted from a sequence starting at 1, provenance is stamped
/// with the configured clock and acting user, and submitted fields are
/// re-validated through the store's own schema.
pub struct InMemoryGateway<R: Resource, C> {
    state: Arc<RwLock<InMemoryState<R>>>,
    schema: Arc<R::Schema>,
    clock: Arc<C>,
    actor: ActorRef,
}

struct InMemoryState<R: Resource> {
    records: HashMap<R::Id, Record<R>>,
    order: Vec<R::Id>,
    last_sequence: u64,
}

impl<R: Resource> Default for InMemoryState<R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            last_sequence: 0,
        }
    }
}

impl<R: Resource, C> Clone for InMemoryGateway<R, C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            schema: Arc::clone(&self.schema),
            clock: Arc::clone(&self.clock),
            actor: self.actor.clone(),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> GatewayError {
    GatewayError::remote(std::io::Error::other(err.to_string()))
}

impl<R, C> InMemoryGateway<R, C>
where
    R: Resource,
    R::Id: From<u64>,
    C: Clock + Send + Sync,
{
    /// Creates an empty store that stamps changes as `actor`.
    #[must_use]
    pub fn new(schema: R::Schema, clock: Arc<C>, actor: ActorRef) -> Self {
        Self {
            state: Arc::new(RwLock::new(InMemoryState::default())),
            schema: Arc::new(schema),
            clock,
            actor,
        }
    }

    /// Looks up a record by identity.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Remote`] when the store lock is poisoned.
    pub fn get(&self, id: &R::Id) -> GatewayResult<Option<Record<R>>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.records.get(id).cloned())
    }

    /// Returns every record in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Remote`] when the store lock is poisoned.
    pub fn list(&self) -> GatewayResult<Vec<Record<R>>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.records.get(id).cloned())
            .collect())
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Remote`] when the store lock is poisoned.
    pub fn len(&self) -> GatewayResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.records.len())
    }

    /// Returns `true` when the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Remote`] when the store lock is poisoned.
    pub fn is_empty(&self) -> GatewayResult<bool> {
        Ok(self.len()? == 0)
    }

    fn check(&self, fields: &R::Fields) -> GatewayResult<()> {
        self.schema
            .validate(&self.schema.to_values(fields))
            .map(drop)
            .map_err(GatewayError::Validation)
    }

    fn insert(&self, fields: &R::Fields) -> GatewayResult<Record<R>> {
        self.check(fields)?;
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_sequence += 1;
        let id = R::Id::from(state.last_sequence);
        let record = Record::new(
            id.clone(),
            fields.clone(),
            Provenance::created(&self.actor, &*self.clock),
        );
        state.order.push(id.clone());
        state.records.insert(id, record.clone());
        Ok(record)
    }

    /// Stores a record directly, bypassing the async port. Used to seed
    /// edit-mode fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`] when the fields fail the store's
    /// schema, or [`GatewayError::Remote`] when the lock is poisoned.
    pub fn seed(&self, fields: &R::Fields) -> GatewayResult<Record<R>> {
        self.insert(fields)
    }
}

#[async_trait]
impl<R, C> EntityGateway<R> for InMemoryGateway<R, C>
where
    R: Resource,
    R::Id: From<u64>,
    C: Clock + Send + Sync,
{
    async fn create(&self, fields: &R::Fields) -> GatewayResult<R::Id> {
        let record = self.insert(fields)?;
        Ok(record.id().clone())
    }

    async fn update(&self, id: &R::Id, fields: &R::Fields) -> GatewayResult<()> {
        self.check(fields)?;
        let mut state = self.state.write().map_err(poisoned)?;
        let record = state
            .records
            .get_mut(id)
            .ok_or_else(|| GatewayError::not_found(id))?;
        record.revise(fields.clone(), &self.actor, &*self.clock);
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> GatewayResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.records.remove(id).is_none() {
            return Err(GatewayError::not_found(id));
        }
        state.order.retain(|existing| existing != id);
        Ok(())
    }
}
