//! Navigation intents emitted by the workflow.

use super::Resource;
use serde::{Deserialize, Serialize};

/// A request to move the user elsewhere. Routing is left to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Show the detail view of one record.
    Detail {
        /// Collection route segment.
        route: String,
        /// Rendered record identity.
        id: String,
    },
    /// Show the collection view.
    List {
        /// Collection route segment.
        route: String,
    },
    /// Show a fresh creation form.
    Create {
        /// Collection route segment.
        route: String,
    },
    /// Go back one step in history.
    Back,
}

impl NavigationIntent {
    /// Detail view of `id` for resource `R`.
    #[must_use]
    pub fn detail<R: Resource>(id: &R::Id) -> Self {
        Self::Detail {
            route: R::ROUTE.to_owned(),
            id: id.to_string(),
        }
    }

    /// Collection view for resource `R`.
    #[must_use]
    pub fn list<R: Resource>() -> Self {
        Self::List {
            route: R::ROUTE.to_owned(),
        }
    }

    /// Creation form for resource `R`.
    #[must_use]
    pub fn create<R: Resource>() -> Self {
        Self::Create {
            route: R::ROUTE.to_owned(),
        }
    }

    /// Returns the URL path of the intent, or `None` for [`Self::Back`].
    #[must_use]
    pub fn path(&self) -> Option<String> {
        match self {
            Self::Detail { route, id } => Some(format!("/{route}/{id}")),
            Self::List { route } => Some(format!("/{route}")),
            Self::Create { route } => Some(format!("/{route}/new")),
            Self::Back => None,
        }
    }
}
