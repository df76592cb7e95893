//! Generic single-entity edit workflow.
//!
//! Every resource screen of the console (tasks, users, ...) reuses the same
//! create/edit/delete pattern: a client-side validated draft, capability
//! gated actions, asynchronous save and delete with distinct in-flight
//! states, server-assigned identity on creation, and an explicit
//! confirmation step before deleting. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Field rules in [`validation`]
//! - Adapter implementations in [`adapters`]
//! - The workflow controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
