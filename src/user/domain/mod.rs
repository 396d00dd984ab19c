//! Domain model for directory users.

mod error;
mod ids;
mod user;

pub use error::{ParseRoleError, UserDomainError};
pub use ids::UserId;
pub use user::{NewUser, Role, User, Username};
