//! Editable task fields and the task resource descriptor.

use super::{TaskDomainError, TaskId, TaskStatus};
use crate::task::schema::TaskSchema;
use crate::workflow::domain::{Record, Resource};
use serde::{Deserialize, Serialize};

/// Validated, user-editable task fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    title: String,
    status: TaskStatus,
    description: Option<String>,
}

impl TaskFields {
    /// Creates task fields with a title and status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            title: raw,
            status,
            description: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Resource descriptor for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResource;

impl Resource for TaskResource {
    type Id = TaskId;
    type Fields = TaskFields;
    type Schema = TaskSchema;

    const LABEL: &'static str = "Task";
    const ROUTE: &'static str = "tasks";
}

/// A persisted task.
pub type Task = Record<TaskResource>;
