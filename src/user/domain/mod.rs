//! Domain model for staff users.

mod error;
mod fields;
mod ids;
mod role;

pub use error::{ParseUserRoleError, UserDomainError};
pub use fields::{User, UserFields, UserResource};
pub use ids::UserId;
pub use role::UserRole;
