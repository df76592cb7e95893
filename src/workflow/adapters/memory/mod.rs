//! In-memory adapters for tests and headless hosts.

mod gateway;
mod sinks;

pub use gateway::InMemoryGateway;
pub use sinks::{RecordingNavigationSink, RecordingNotificationSink};
