//! Caller identity passed explicitly into every lifecycle call.

use crate::user::domain::{Role, User, UserId};

/// The party invoking a task operation.
///
/// `System` and `Admin` hold the administrative capability; `Member` may only
/// act on tasks they are assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    /// An automated caller with no user identity.
    System,
    /// An administrator.
    Admin(UserId),
    /// A team member.
    Member(UserId),
}

impl Actor {
    /// Builds the actor for a directory user according to their role.
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        match user.role() {
            Role::Admin => Self::Admin(user.id()),
            Role::Member => Self::Member(user.id()),
        }
    }

    /// Returns the user identity recorded in activity entries.
    ///
    /// `None` marks a system-triggered action.
    #[must_use]
    pub const fn user_id(self) -> Option<UserId> {
        match self {
            Self::System => None,
            Self::Admin(id) | Self::Member(id) => Some(id),
        }
    }

    /// Returns `true` when the actor holds the administrative capability.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::System | Self::Admin(_))
    }
}
