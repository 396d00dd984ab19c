//! Service layer for task creation, status changes, freezing and soft
//! deletion.

use super::access::{
    load_task, record_activity, require_admin, require_participant, require_self_or_admin,
    resolve_assignees,
};
use super::{TaskLifecycleResult, TaskPolicy};
use crate::task::{
    domain::{
        ActivityDraft, ActivityKind, Actor, NewTaskData, Schedule, StatusSummary, Task,
        TaskDescription, TaskId, TaskStatus, TaskTitle,
    },
    ports::TaskRepository,
};
use crate::user::{domain::UserId, ports::UserDirectory};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;

/// Request payload for creating a task.
///
/// Dates are optional here so missing form fields surface as validation
/// errors rather than parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assignee_ids: Vec<UserId>,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with a title and no other fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee_ids: Vec::new(),
            start_date: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the requested assignees.
    #[must_use]
    pub fn with_assignees(mut self, assignee_ids: impl IntoIterator<Item = UserId>) -> Self {
        self.assignee_ids = assignee_ids.into_iter().collect();
        self
    }

    /// Sets the start and due dates.
    #[must_use]
    pub const fn with_dates(mut self, start_date: NaiveDate, due_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self.due_date = Some(due_date);
        self
    }

    /// Sets the start date only.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the due date only.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Task lifecycle orchestration service.
///
/// Every mutation is persisted together with one activity entry through
/// [`TaskRepository::store_with_activity`] or
/// [`TaskRepository::update_with_activity`].
#[derive(Clone)]
pub struct TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    directory: Arc<D>,
    clock: Arc<C>,
    policy: Arc<TaskPolicy>,
}

impl<R, D, C> TaskLifecycleService<R, D, C>
where
    R: TaskRepository,
    D: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default policy.
    #[must_use]
    pub fn new(repository: Arc<R>, directory: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            repository,
            directory,
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

    /// Creates a pending task.
    ///
    /// Unknown assignee ids are dropped and duplicates collapse. The creation
    /// entry reports the number of ids requested.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors,
    /// [`super::TaskLifecycleError::Domain`] when the title is blank, the
    /// description is too long, a date is missing, the due date precedes
    /// the start date, or no requested assignee resolves, and
    /// [`super::TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        require_admin(*actor, "create")?;
        let title = TaskTitle::new(request.title)?;
        let description = match request.description {
            Some(text) => TaskDescription::new(text, self.policy.max_description_chars)?,
            None => None,
        };
        let schedule = Schedule::from_optional(request.start_date, request.due_date)?;
        let requested_count = request.assignee_ids.len();
        let (assignees, _) = resolve_assignees(&*self.directory, &request.assignee_ids).await?;

        let task = Task::new(
            NewTaskData {
                title,
                description,
                schedule,
                assignees,
            },
            &*self.clock,
        );
        let activity = record_activity(
            ActivityDraft::of_kind(
                task.id(),
                actor.user_id(),
                ActivityKind::TaskCreated,
                format!("Task created and assigned to {requested_count} users"),
            ),
            &self.policy,
            &*self.clock,
        )?;
        self.repository.store_with_activity(&task, &activity).await?;
        tracing::info!(task_id = %task.id(), assignees = task.assignees().len(), "task created");
        Ok(task)
    }

    /// Returns a task by id, including soft-deleted tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::NotFound`] when the task does not
    /// exist and [`super::TaskLifecycleError::NotAssignee`] when a member is
    /// not assigned to it.
    pub async fn get(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let task = load_task(&*self.repository, task_id).await?;
        require_participant(*actor, &task)?;
        Ok(task)
    }

    /// Sets the task status.
    ///
    /// Any status may follow any other.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::NotFound`] when the task does not
    /// exist, [`super::TaskLifecycleError::NotAssignee`] when a member is not
    /// assigned, and [`crate::task::domain::TaskDomainError::Frozen`] when
    /// the task is frozen.
    pub async fn update_status(
        &self,
        actor: &Actor,
        task_id: TaskId,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = load_task(&*self.repository, task_id).await?;
        require_participant(*actor, &task)?;
        if let Err(err) = task.update_status(status, &*self.clock) {
            tracing::warn!(task_id = %task_id, requested = status.as_str(), "status change on frozen task rejected");
            return Err(err.into());
        }

        let activity = record_activity(
            ActivityDraft::of_kind(
                task_id,
                actor.user_id(),
                ActivityKind::StatusUpdated,
                format!("Changed to {}", status.label()),
            ),
            &self.policy,
            &*self.clock,
        )?;
        self.repository.update_with_activity(&task, &activity).await?;
        tracing::info!(task_id = %task_id, status = status.as_str(), "task status updated");
        Ok(task)
    }

    /// Flips the freeze flag.
    ///
    /// Freezing blocks status changes only; reassignment and comments are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors
    /// and [`super::TaskLifecycleError::NotFound`] when the task does not
    /// exist.
    pub async fn toggle_freeze(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<Task> {
        require_admin(*actor, "toggle_freeze")?;
        let mut task = load_task(&*self.repository, task_id).await?;
        let frozen = task.toggle_freeze(&*self.clock);
        let (kind, details) = if frozen {
            (ActivityKind::TaskFrozen, "Admin has frozen this task")
        } else {
            (ActivityKind::TaskUnfrozen, "Admin has unfrozen this task")
        };
        self.persist(actor, task, kind, details).await
    }

    /// Hides a task from default listings.
    ///
    /// The task, its comments and its activity trail are kept.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors
    /// and [`super::TaskLifecycleError::NotFound`] when the task does not
    /// exist.
    pub async fn soft_delete(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<Task> {
        require_admin(*actor, "soft_delete")?;
        let mut task = load_task(&*self.repository, task_id).await?;
        task.soft_delete(&*self.clock);
        self.persist(
            actor,
            task,
            ActivityKind::TaskSoftDeleted,
            "Task marked as deleted but kept in DB",
        )
        .await
    }

    /// Returns a soft-deleted task to default listings.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors
    /// and [`super::TaskLifecycleError::NotFound`] when the task does not
    /// exist.
    pub async fn restore(&self, actor: &Actor, task_id: TaskId) -> TaskLifecycleResult<Task> {
        require_admin(*actor, "restore")?;
        let mut task = load_task(&*self.repository, task_id).await?;
        task.restore(&*self.clock);
        self.persist(
            actor,
            task,
            ActivityKind::TaskRestored,
            "Task restored from soft delete",
        )
        .await
    }

    /// Returns every task that is not soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors
    /// and [`super::TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_all_active(&self, actor: &Actor) -> TaskLifecycleResult<Vec<Task>> {
        require_admin(*actor, "find_all_active")?;
        Ok(self.repository.find_all_active().await?)
    }

    /// Returns every task assigned to `user_id`, deleted tasks included.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] when a member asks
    /// for another user's tasks.
    pub async fn find_by_assignee(
        &self,
        actor: &Actor,
        user_id: UserId,
    ) -> TaskLifecycleResult<Vec<Task>> {
        require_self_or_admin(*actor, user_id, "find_by_assignee")?;
        Ok(self.repository.find_by_assignee_id(user_id).await?)
    }

    /// Returns every task with `status`, deleted tasks included.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn find_by_status(
        &self,
        actor: &Actor,
        status: TaskStatus,
    ) -> TaskLifecycleResult<Vec<Task>> {
        require_admin(*actor, "find_by_status")?;
        Ok(self.repository.find_by_status(status).await?)
    }

    /// Returns unfinished tasks due strictly before `reference`, deleted
    /// tasks included.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn find_delayed(
        &self,
        actor: &Actor,
        reference: NaiveDate,
    ) -> TaskLifecycleResult<Vec<Task>> {
        require_admin(*actor, "find_delayed")?;
        Ok(self
            .repository
            .find_due_before_excluding_status(reference, TaskStatus::Completed)
            .await?)
    }

    /// Counts tasks with `status`, deleted tasks included.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn count_by_status(
        &self,
        actor: &Actor,
        status: TaskStatus,
    ) -> TaskLifecycleResult<u64> {
        require_admin(*actor, "count_by_status")?;
        Ok(self.repository.count_by_status(status).await?)
    }

    /// Counts unfinished tasks due strictly before `reference`.
    ///
    /// Soft-deleted tasks are counted too; use
    /// [`Self::active_summary`] for the deleted-filtered figure.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn count_delayed(
        &self,
        actor: &Actor,
        reference: NaiveDate,
    ) -> TaskLifecycleResult<u64> {
        require_admin(*actor, "count_delayed")?;
        Ok(self
            .repository
            .count_due_before_excluding_status(reference, TaskStatus::Completed)
            .await?)
    }

    /// Builds the administrator dashboard counts over all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn dashboard_summary(
        &self,
        actor: &Actor,
        reference: NaiveDate,
    ) -> TaskLifecycleResult<StatusSummary> {
        Ok(StatusSummary {
            pending: self.count_by_status(actor, TaskStatus::Pending).await?,
            in_progress: self.count_by_status(actor, TaskStatus::InProgress).await?,
            completed: self.count_by_status(actor, TaskStatus::Completed).await?,
            delayed: self.count_delayed(actor, reference).await?,
        })
    }

    /// Builds a member's dashboard counts over every task assigned to them.
    ///
    /// Soft-deleted assignments are counted, as [`Self::find_by_assignee`]
    /// returns them.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] when a member asks
    /// for another user's summary.
    pub async fn assignee_summary(
        &self,
        actor: &Actor,
        user_id: UserId,
        reference: NaiveDate,
    ) -> TaskLifecycleResult<StatusSummary> {
        let tasks = self.find_by_assignee(actor, user_id).await?;
        Ok(StatusSummary::from_tasks(&tasks, reference))
    }

    /// Builds counts over the active task listing.
    ///
    /// Unlike [`Self::dashboard_summary`], soft-deleted tasks are left out,
    /// including from the delayed figure.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskLifecycleError::Forbidden`] for non-admin actors.
    pub async fn active_summary(
        &self,
        actor: &Actor,
        reference: NaiveDate,
    ) -> TaskLifecycleResult<StatusSummary> {
        let tasks = self.find_all_active(actor).await?;
        Ok(StatusSummary::from_tasks(&tasks, reference))
    }

    async fn persist(
        &self,
        actor: &Actor,
        task: Task,
        kind: ActivityKind,
        details: &str,
    ) -> TaskLifecycleResult<Task> {
        let activity = record_activity(
            ActivityDraft::of_kind(task.id(), actor.user_id(), kind, details),
            &self.policy,
            &*self.clock,
        )?;
        self.repository.update_with_activity(&task, &activity).await?;
        tracing::info!(task_id = %task.id(), action = kind.label(), "task updated");
        Ok(task)
    }
}
