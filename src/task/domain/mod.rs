//! Domain model for tasks.

mod error;
mod fields;
mod ids;
mod status;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use fields::{Task, TaskFields, TaskResource};
pub use ids::TaskId;
pub use status::TaskStatus;
