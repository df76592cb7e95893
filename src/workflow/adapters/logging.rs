//! Sinks that forward workflow side effects to `tracing`.

use tracing::{info, warn};

use crate::workflow::{
    domain::{NavigationIntent, Notification, NotificationKind},
    ports::{NavigationSink, NotificationSink},
};

/// Logs notifications as structured events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        let description = notification.description().unwrap_or_default();
        match notification.kind() {
            NotificationKind::Success => {
                info!(title = notification.title(), description, "notification");
            }
            NotificationKind::Failure => {
                warn!(title = notification.title(), description, "notification");
            }
        }
    }
}

/// Logs navigation intents as structured events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigationSink;

impl NavigationSink for TracingNavigationSink {
    fn navigate(&self, intent: NavigationIntent) {
        match intent.path() {
            Some(path) => info!(%path, "navigate"),
            None => info!("navigate back"),
        }
    }
}
