//! Service layer for the task activity trail.

use super::access::record_activity;
use super::{TaskLifecycleResult, TaskPolicy};
use crate::task::{
    domain::{ActivityDraft, TaskActivity, TaskId},
    ports::ActivityLog,
};
use mockable::Clock;
use std::sync::Arc;

/// Append-only activity trail service.
///
/// Lifecycle services write their own entries atomically with the task;
/// this service records standalone entries and serves the history view.
#[derive(Clone)]
pub struct AuditLogService<L, C>
where
    L: ActivityLog,
    C: Clock + Send + Sync,
{
    log: Arc<L>,
    clock: Arc<C>,
    policy: Arc<TaskPolicy>,
}

impl<L, C> AuditLogService<L, C>
where
    L: ActivityLog,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default policy.
    #[must_use]
    pub fn new(log: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            log,
            clock,
            policy: Arc::new(TaskPolicy::default()),
        }
    }

    /// Replaces the policy.
    #[must_use]
    pub fn with_policy(mut self, policy: TaskPolicy) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Appends an entry stamped with the current clock time.
    ///
    /// A missing action is recorded as the policy's placeholder label and
    /// missing details as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::domain::TaskDomainError::ActivityWithoutTask`]
    /// when the draft has no task reference and
    /// [`crate::task::ports::TaskRepositoryError::NotFound`] when the task
    /// does not exist.
    pub async fn log(&self, draft: ActivityDraft) -> TaskLifecycleResult<TaskActivity> {
        let activity = record_activity(draft, &self.policy, &*self.clock)?;
        self.log.append(&activity).await?;
        tracing::debug!(task_id = %activity.task_id(), action = activity.action(), "activity recorded");
        Ok(activity)
    }

    /// Returns the entries for a task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Repository`] when lookup fails.
    pub async fn get_for_task(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<TaskActivity>> {
        Ok(self.log.list_for_task(task_id).await?)
    }
}
