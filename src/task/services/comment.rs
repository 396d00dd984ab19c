//! Service layer for task comments.

use super::access::{load_task, record_activity, require_participant, require_user};
use super::{TaskLifecycleResult, TaskPolicy};
use crate::task::{
    domain::{ActivityDraft, ActivityKind, Actor, Comment, TaskId},
    ports::{ActivityLog, CommentRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Comment service.
///
/// Comments are accepted on frozen and soft-deleted tasks alike.
#[derive(Clone)]
pub struct CommentService<R, M, C>
where
    R: TaskRepository + ActivityLog,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    comments: Arc<M>,
    clock: Arc<C>,
    policy: Arc<TaskPolicy>,
}

impl<R, M, C> CommentService<R, M, C>
where
    R: TaskRepository + ActivityLog,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default policy.
    #[must_use]
    pub fn new(repository: Arc<R>, comments: Arc<M>, clock: Arc<C>) -> Self {
        Self {
            repository,
            comments,
            clock,
            policy: Arc::new(TaskPolicy::default()),
        }
    }

    /// Adds a comment and records a `Comment` activity entry.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for actors without a
    /// user identity, [`super::TaskLifecycleError::NotFound`] when the task
    /// does not exist, [`super::TaskLifecycleError::NotAssignee`] when a
    /// member is not assigned, and
    /// [`crate::task::domain::TaskDomainError::EmptyComment`] for blank
    /// content.
    pub async fn add(
        &self,
        actor: &Actor,
        task_id: TaskId,
        content: &str,
    ) -> TaskLifecycleResult<Comment> {
        let author = require_user(*actor, "add_comment")?;
        let task = load_task(&*self.repository, task_id).await?;
        require_participant(*actor, &task)?;

        let comment = Comment::new(task_id, author, content, &*self.clock)?;
        self.comments.add(&comment).await?;
        let activity = record_activity(
            ActivityDraft::of_kind(task_id, Some(author), ActivityKind::Comment, content),
            &self.policy,
            &*self.clock,
        )?;
        self.repository.append(&activity).await?;
        tracing::info!(task_id = %task_id, comment_id = %comment.id(), "comment added");
        Ok(comment)
    }

    /// Returns the comments on a task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Comments`] when lookup fails.
    pub async fn list_by_task(&self, task_id: TaskId) -> TaskLifecycleResult<Vec<Comment>> {
        Ok(self.comments.list_by_task(task_id).await?)
    }
}
