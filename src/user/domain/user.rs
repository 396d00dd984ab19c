//! Directory user record and its validated fields.

use super::{ParseRoleError, UserDomainError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role held by a directory user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administers tasks and users.
    Admin,
    /// Works on tasks they are assigned to.
    Member,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "member" | "user" => Ok(Self::Member),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// Unique login name of a directory user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a validated username.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyUsername`] when the trimmed value is
    /// empty, or [`UserDomainError::InvalidUsername`] when it contains
    /// inner whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(UserDomainError::EmptyUsername);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(UserDomainError::InvalidUsername(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the username as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: Username,
    role: Role,
}

impl User {
    /// Creates a user record with a fresh identifier.
    #[must_use]
    pub fn new(username: Username, role: Role) -> Self {
        Self {
            id: UserId::new(),
            username,
            role,
        }
    }

    /// Reconstructs a user from persisted fields.
    #[must_use]
    pub const fn from_parts(id: UserId, username: Username, role: Role) -> Self {
        Self { id, username, role }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns `true` for administrators.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Request payload for adding a user to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Requested username.
    pub username: Username,
    /// Requested role.
    pub role: Role,
}

impl NewUser {
    /// Creates a validated request from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError`] when the username is invalid.
    pub fn new(username: impl Into<String>, role: Role) -> Result<Self, UserDomainError> {
        Ok(Self {
            username: Username::new(username)?,
            role,
        })
    }
}
