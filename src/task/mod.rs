//! Task administration.
//!
//! Tasks are the primary resource of the console. This module contributes
//! the task domain values (identity, status, editable fields), the task form
//! schema, and a resource descriptor that plugs tasks into the generic
//! edit workflow in [`crate::workflow`].

pub mod domain;
pub mod schema;

#[cfg(test)]
mod tests;
