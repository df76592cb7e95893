//! Step definitions for task edit workflow scenarios.

pub mod given;
