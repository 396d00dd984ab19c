//! Service-level errors shared by the task services.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::{CommentRepositoryError, TaskRepositoryError},
};
use crate::user::{domain::UserId, ports::UserDirectoryError};
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or policy check failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),

    /// Comment repository operation failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),

    /// User directory operation failed.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The actor lacks the capability for the operation.
    #[error("operation '{operation}' is not permitted for this actor")]
    Forbidden {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A member acted on a task they are not assigned to.
    #[error("user {user_id} is not assigned to task {task_id}")]
    NotAssignee {
        /// Target task.
        task_id: TaskId,
        /// Acting user.
        user_id: UserId,
    },
}

/// Coarse classification of [`TaskLifecycleError`] for callers that map
/// failures onto responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input was rejected; retrying unchanged will fail again.
    Validation,
    /// A referenced task or user does not exist.
    NotFound,
    /// The task is frozen; unfreeze before retrying.
    Frozen,
    /// The actor may not perform the operation.
    Forbidden,
    /// The write collides with existing data.
    Conflict,
    /// Storage failed.
    Persistence,
}

impl TaskLifecycleError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(TaskDomainError::Frozen(_)) => ErrorKind::Frozen,
            Self::Domain(_) => ErrorKind::Validation,
            Self::NotFound(_)
            | Self::Repository(TaskRepositoryError::NotFound(_))
            | Self::Directory(UserDirectoryError::NotFound(_)) => ErrorKind::NotFound,
            Self::Forbidden { .. } | Self::NotAssignee { .. } => ErrorKind::Forbidden,
            Self::Repository(
                TaskRepositoryError::DuplicateTask(_) | TaskRepositoryError::ActivityMismatch { .. },
            )
            | Self::Directory(UserDirectoryError::DuplicateUsername(_)) => ErrorKind::Conflict,
            Self::Repository(TaskRepositoryError::Persistence(_))
            | Self::Comments(_)
            | Self::Directory(UserDirectoryError::Persistence(_)) => ErrorKind::Persistence,
        }
    }
}

/// Result type for task service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;
