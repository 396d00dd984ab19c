//! Directory port used by the task engine to resolve user identities.

use crate::user::domain::{NewUser, Role, User, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User directory contract.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Adds a user to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::DuplicateUsername`] when the username is
    /// already taken.
    async fn create(&self, user: NewUser) -> UserDirectoryResult<User>;

    /// Renames a user and changes their role.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist
    /// or [`UserDirectoryError::DuplicateUsername`] when another user already
    /// holds the new username.
    async fn update(&self, id: UserId, username: Username, role: Role)
    -> UserDirectoryResult<User>;

    /// Removes a user from the directory.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist.
    async fn delete(&self, id: UserId) -> UserDirectoryResult<()>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &Username) -> UserDirectoryResult<Option<User>>;

    /// Resolves the given identifiers.
    ///
    /// Unknown identifiers are dropped and duplicates collapse, so the result
    /// may be shorter than the input.
    async fn find_all_by_id(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<User>>;

    /// Returns every user in the directory.
    async fn find_all(&self) -> UserDirectoryResult<Vec<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// The username is already taken.
    #[error("username already exists: {0}")]
    DuplicateUsername(Username),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
