//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskActivity, TaskId, TaskStatus};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutation is persisted together with the activity entry describing
/// it. Implementations must apply both writes or neither.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and its creation entry as one unit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists, or [`TaskRepositoryError::ActivityMismatch`] when the entry
    /// references another task.
    async fn store_with_activity(
        &self,
        task: &Task,
        activity: &TaskActivity,
    ) -> TaskRepositoryResult<()>;

    /// Replaces an existing task and appends its activity entry as one unit.
    ///
    /// Concurrent updates of the same task are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist,
    /// or [`TaskRepositoryError::ActivityMismatch`] when the entry references
    /// another task.
    async fn update_with_activity(
        &self,
        task: &Task,
        activity: &TaskActivity,
    ) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier, deleted or not.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task that is not soft-deleted.
    async fn find_all_active(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task assigned to `user_id`, deleted tasks included.
    async fn find_by_assignee_id(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task with `status`, deleted tasks included.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task due strictly before `date` whose status is not
    /// `excluded`, deleted tasks included.
    async fn find_due_before_excluding_status(
        &self,
        date: NaiveDate,
        excluded: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks with `status`, deleted tasks included.
    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64>;

    /// Counts tasks due strictly before `date` whose status is not
    /// `excluded`, deleted tasks included.
    async fn count_due_before_excluding_status(
        &self,
        date: NaiveDate,
        excluded: TaskStatus,
    ) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The paired activity entry references a different task.
    #[error("activity for task {activity_task} cannot be paired with task {task}")]
    ActivityMismatch {
        /// Task being written.
        task: TaskId,
        /// Task referenced by the activity entry.
        activity_task: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
