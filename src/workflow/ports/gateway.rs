//! Entity gateway port: the remote persistence boundary.

use crate::workflow::domain::{FieldErrors, Resource};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote create, update, and delete operations for resource `R`.
///
/// Every call is fallible and may be slow. Callers must not assume
/// synchronous completion.
#[async_trait]
pub trait EntityGateway<R: Resource>: Send + Sync {
    /// Creates a record and returns its server-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`] when the store rejects the
    /// fields, or [`GatewayError::Remote`] for any other failure.
    async fn create(&self, fields: &R::Fields) -> GatewayResult<R::Id>;

    /// Replaces the editable fields of an existing record. Provenance is
    /// stamped by the store.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the record no longer exists,
    /// or [`GatewayError::Remote`] otherwise.
    async fn update(&self, id: &R::Id, fields: &R::Fields) -> GatewayResult<()>;

    /// Irreversibly deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the record no longer exists,
    /// or [`GatewayError::Remote`] otherwise.
    async fn delete(&self, id: &R::Id) -> GatewayResult<()>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The store rejected the submitted fields.
    #[error("rejected by server validation: {0}")]
    Validation(FieldErrors),

    /// The record no longer exists.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Transport, permission, or constraint failure in the store.
    #[error("remote error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a remote failure.
    #[must_use]
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }

    /// Not-found error for identity `id`.
    #[must_use]
    pub fn not_found(id: &impl std::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
