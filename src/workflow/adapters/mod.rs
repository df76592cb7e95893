//! Adapter implementations for workflow ports.

pub mod memory;

mod logging;

pub use logging::{TracingNavigationSink, TracingNotificationSink};
