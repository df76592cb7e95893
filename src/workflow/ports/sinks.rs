//! Side-effect ports for notifications and navigation.

use crate::workflow::domain::{NavigationIntent, Notification};

/// Receives notifications emitted at the end of every save or delete.
pub trait NotificationSink: Send + Sync {
    /// Publishes one notification.
    fn notify(&self, notification: Notification);
}

/// Receives navigation intents emitted by the workflow.
pub trait NavigationSink: Send + Sync {
    /// Requests a move to another view.
    fn navigate(&self, intent: NavigationIntent);
}
