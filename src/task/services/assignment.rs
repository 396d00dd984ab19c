//! Service layer for replacing task assignees.

use super::access::{
    join_usernames, load_task, record_activity, require_admin, require_user, resolve_assignees,
};
use super::{TaskLifecycleError, TaskLifecycleResult, TaskPolicy};
use crate::task::{
    domain::{ActivityDraft, ActivityKind, Actor, Comment, Task, TaskId},
    ports::{CommentRepository, TaskRepository},
};
use crate::user::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for a member-initiated reassignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignRequest {
    task_id: TaskId,
    assignee_ids: Vec<UserId>,
    note: Option<String>,
}

impl ReassignRequest {
    /// Creates a request without a note.
    #[must_use]
    pub fn new(task_id: TaskId, assignee_ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            task_id,
            assignee_ids: assignee_ids.into_iter().collect(),
            note: None,
        }
    }

    /// Attaches a free-text note explaining the handover.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Assignee replacement service.
///
/// Assignment always replaces the whole set. Frozen tasks can still be
/// reassigned.
#[derive(Clone)]
pub struct AssignmentService<R, D, M, C>
where
    R: TaskRepository,
    D: UserDirectory,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    comments: Arc<M>,
    clock: Arc<C>,
    policy: Arc<TaskPolicy>,
}

impl<R, D, M, C> AssignmentService<R, D, M, C>
where
    R: TaskRepository,
    D: UserDirectory,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default policy.
    #[must_use]
    pub fn new(repository: Arc<R>, directory: Arc<D>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
            comments,
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

    /// Replaces the assignee set of a task.
    ///
    /// Users missing from the new list lose their assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] for non-admin actors,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, and
    /// [`TaskLifecycleError::Domain`] when the list is empty or resolves to
    /// no known user.
    pub async fn assign_users(
        &self,
        actor: &Actor,
        task_id: TaskId,
        assignee_ids: &[UserId],
    ) -> TaskLifecycleResult<Task> {
        require_admin(*actor, "assign_users")?;
        let mut task = load_task(&*self.repository, task_id).await?;
        let (assignees, users) = resolve_assignees(&*self.directory, assignee_ids).await?;
        task.replace_assignees(assignees, &*self.clock);

        let details = format!("Task assigned to {}", join_usernames(&users));
        self.persist(actor, &task, details).await?;
        Ok(task)
    }

    /// Hands a task over on behalf of one of its assignees.
    ///
    /// The initiator's id is added to the requested set, so they remain
    /// assigned afterwards. A non-blank note is also stored as a comment
    /// carrying the policy's reassignment prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Forbidden`] for actors without a user
    /// identity, [`TaskLifecycleError::NotFound`] when the task does not
    /// exist, [`TaskLifecycleError::NotAssignee`] when the initiator is not
    /// assigned, and [`TaskLifecycleError::Directory`] when the initiator is
    /// unknown to the directory.
    pub async fn reassign(
        &self,
        actor: &Actor,
        request: ReassignRequest,
    ) -> TaskLifecycleResult<Task> {
        let initiator = require_user(*actor, "reassign")?;
        let mut task = load_task(&*self.repository, request.task_id).await?;
        if !task.is_assigned(initiator) {
            tracing::warn!(task_id = %task.id(), user_id = %initiator, "reassignment by non-assignee rejected");
            return Err(TaskLifecycleError::NotAssignee {
                task_id: task.id(),
                user_id: initiator,
            });
        }

        let mut requested = request.assignee_ids;
        if !requested.contains(&initiator) {
            requested.push(initiator);
        }
        let (assignees, users) = resolve_assignees(&*self.directory, &requested).await?;
        let initiator_name = users
            .iter()
            .find(|user| user.id() == initiator)
            .map(|user| user.username().clone())
            .ok_or(UserDirectoryError::NotFound(initiator))?;
        task.replace_assignees(assignees, &*self.clock);

        let note = request
            .note
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty());
        let mut details = format!(
            "{initiator_name} reassigned task to {}",
            join_usernames(&users)
        );
        if let Some(text) = note {
            details.push_str(" with note: ");
            details.push_str(text);
        }
        self.persist(actor, &task, details).await?;

        if let Some(text) = note {
            let comment = Comment::new(
                task.id(),
                initiator,
                format!("{}{text}", self.policy.reassign_note_prefix),
                &*self.clock,
            )?;
            self.comments.add(&comment).await?;
        }
        Ok(task)
    }

    async fn persist(&self, actor: &Actor, task: &Task, details: String) -> TaskLifecycleResult<()> {
        let activity = record_activity(
            ActivityDraft::of_kind(
                task.id(),
                actor.user_id(),
                ActivityKind::TaskReassigned,
                details,
            ),
            &self.policy,
            &*self.clock,
        )?;
        self.repository.update_with_activity(task, &activity).await?;
        tracing::info!(task_id = %task.id(), assignees = task.assignees().len(), "task reassigned");
        Ok(())
    }
}
