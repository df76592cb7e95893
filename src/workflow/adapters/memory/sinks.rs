//! Recording notification and navigation sinks.

use std::sync::{Arc, Mutex, PoisonError};

use crate::workflow::{
    domain::{NavigationIntent, Notification},
    ports::{NavigationSink, NotificationSink},
};

/// Keeps every notification in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

/// Keeps every navigation intent in memory, in emission order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigationSink {
    intents: Arc<Mutex<Vec<NavigationIntent>>>,
}

impl RecordingNavigationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the intents received so far.
    #[must_use]
    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the URL paths of the intents received so far, skipping
    /// [`NavigationIntent::Back`].
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.intents()
            .iter()
            .filter_map(NavigationIntent::path)
            .collect()
    }
}

impl NavigationSink for RecordingNavigationSink {
    fn navigate(&self, intent: NavigationIntent) {
        self.intents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent);
    }
}
