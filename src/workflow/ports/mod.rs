//! Port contracts for the edit workflow.
//!
//! Ports define infrastructure-agnostic interfaces used by the workflow
//! controller: validation schemas, the entity gateway, and the
//! notification and navigation sinks.

pub mod gateway;
pub mod schema;
pub mod sinks;

pub use gateway::{EntityGateway, GatewayError, GatewayResult};
pub use schema::{ConfigError, FormSchema, SchemaResult, ValidationConfig};
pub use sinks::{NavigationSink, NotificationSink};
