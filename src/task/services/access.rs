//! Capability checks and lookups shared by the task services.

use super::{TaskLifecycleError, TaskLifecycleResult, TaskPolicy};
use crate::task::{
    domain::{Actor, ActivityDraft, AssigneeSet, Task, TaskActivity, TaskDomainError, TaskId},
    ports::TaskRepository,
};
use crate::user::{
    domain::{User, UserId},
    ports::UserDirectory,
};
use mockable::Clock;

/// Rejects actors without the administrative capability.
pub(super) fn require_admin(actor: Actor, operation: &'static str) -> TaskLifecycleResult<()> {
    if actor.is_admin() {
        return Ok(());
    }
    tracing::warn!(operation, "rejected non-admin actor");
    Err(TaskLifecycleError::Forbidden { operation })
}

/// Rejects members who are not assigned to `task`. Admins always pass.
pub(super) fn require_participant(actor: Actor, task: &Task) -> TaskLifecycleResult<()> {
    match actor {
        Actor::System | Actor::Admin(_) => Ok(()),
        Actor::Member(user_id) if task.is_assigned(user_id) => Ok(()),
        Actor::Member(user_id) => {
            tracing::warn!(task_id = %task.id(), user_id = %user_id, "rejected non-assignee");
            Err(TaskLifecycleError::NotAssignee {
                task_id: task.id(),
                user_id,
            })
        }
    }
}

/// Returns the acting user's identity, rejecting system actors.
pub(super) fn require_user(actor: Actor, operation: &'static str) -> TaskLifecycleResult<UserId> {
    actor.user_id().ok_or_else(|| {
        tracing::warn!(operation, "rejected actor without user identity");
        TaskLifecycleError::Forbidden { operation }
    })
}

/// Rejects members querying another user's assignments.
pub(super) fn require_self_or_admin(
    actor: Actor,
    user_id: UserId,
    operation: &'static str,
) -> TaskLifecycleResult<()> {
    match actor {
        Actor::Member(own_id) if own_id != user_id => {
            tracing::warn!(operation, "rejected query for another member");
            Err(TaskLifecycleError::Forbidden { operation })
        }
        _ => Ok(()),
    }
}

/// Loads a task or reports it missing.
pub(super) async fn load_task<R>(repository: &R, task_id: TaskId) -> TaskLifecycleResult<Task>
where
    R: TaskRepository + ?Sized,
{
    repository
        .find_by_id(task_id)
        .await?
        .ok_or(TaskLifecycleError::NotFound(task_id))
}

/// Resolves requested assignee ids through the directory.
///
/// Unknown ids are dropped. Returns the resulting set with the resolved
/// users sorted by username.
pub(super) async fn resolve_assignees<D>(
    directory: &D,
    requested: &[UserId],
) -> TaskLifecycleResult<(AssigneeSet, Vec<User>)>
where
    D: UserDirectory + ?Sized,
{
    if requested.is_empty() {
        return Err(TaskDomainError::NoAssignees.into());
    }
    let mut users = directory.find_all_by_id(requested).await?;
    if users.is_empty() {
        return Err(TaskDomainError::NoResolvableAssignees.into());
    }
    users.sort_by(|left, right| left.username().cmp(right.username()));
    let assignees = AssigneeSet::new(users.iter().map(User::id))?;
    Ok((assignees, users))
}

/// Joins resolved usernames for activity details.
pub(super) fn join_usernames(users: &[User]) -> String {
    users
        .iter()
        .map(|user| user.username().as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records a draft with the policy's placeholder label.
pub(super) fn record_activity(
    draft: ActivityDraft,
    policy: &TaskPolicy,
    clock: &impl Clock,
) -> TaskLifecycleResult<TaskActivity> {
    Ok(TaskActivity::record(
        draft,
        &policy.unknown_action_label,
        clock,
    )?)
}
