//! Append-only activity log port.

use super::TaskRepositoryResult;
use crate::task::domain::{TaskActivity, TaskId};
use async_trait::async_trait;

/// Append-only store of task activity entries.
///
/// The log has no update or delete operation.
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// Appends a standalone entry.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskRepositoryError::NotFound`] when the referenced
    /// task does not exist.
    async fn append(&self, activity: &TaskActivity) -> TaskRepositoryResult<()>;

    /// Returns the entries for `task_id`, newest first.
    ///
    /// Entries sharing a timestamp are returned latest-appended first.
    async fn list_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskActivity>>;
}
