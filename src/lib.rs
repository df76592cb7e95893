//! Backoffice: edit workflows for an internal admin console.
//!
//! Staff create, edit, and delete domain records through role-gated forms.
//! This crate provides the reusable workflow behind every such form, plus
//! the task and user resources built on it.
//!
//! # Architecture
//!
//! Backoffice follows hexagonal architecture principles:
//!
//! - **Domain**: Pure form, lifecycle, and record types with no I/O
//! - **Ports**: Abstract trait interfaces for the gateway, schemas, and sinks
//! - **Adapters**: Concrete implementations of ports (in-memory, `tracing`)
//!
//! # Modules
//!
//! - [`workflow`]: Generic create/edit/delete workflow controller
//! - [`task`]: Task resource and form schema
//! - [`user`]: Staff user resource and form schema

pub mod task;
pub mod user;
pub mod workflow;
