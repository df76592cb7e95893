//! Staff user administration.
//!
//! Users are edited through the same workflow as tasks; this module only
//! contributes the resource descriptor, its domain values, and its schema.

pub mod domain;
pub mod schema;

#[cfg(test)]
mod tests;
