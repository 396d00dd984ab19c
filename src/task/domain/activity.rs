//! Append-only activity entries recorded against tasks.

use super::{ActivityId, TaskDomainError, TaskId};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Actions the engine records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// A task was created.
    TaskCreated,
    /// A task status changed.
    StatusUpdated,
    /// A task was frozen.
    TaskFrozen,
    /// A task was unfrozen.
    TaskUnfrozen,
    /// A task was soft-deleted.
    TaskSoftDeleted,
    /// A soft-deleted task was restored.
    TaskRestored,
    /// The assignee set was replaced.
    TaskReassigned,
    /// A comment was added.
    Comment,
}

impl ActivityKind {
    /// Returns the action label stored on the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TaskCreated => "Task Created",
            Self::StatusUpdated => "Status Updated",
            Self::TaskFrozen => "Task Frozen",
            Self::TaskUnfrozen => "Task Unfrozen",
            Self::TaskSoftDeleted => "Task Soft Deleted",
            Self::TaskRestored => "Task Restored",
            Self::TaskReassigned => "Task Reassigned",
            Self::Comment => "Comment",
        }
    }
}

/// Unvalidated input for a new activity entry.
///
/// Every field is optional so callers can record partial information; the
/// task reference is checked when the entry is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDraft {
    task_id: Option<TaskId>,
    actor: Option<UserId>,
    action: Option<String>,
    details: Option<String>,
}

impl ActivityDraft {
    /// Creates an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft for `task_id` with a known action and details.
    #[must_use]
    pub fn of_kind(
        task_id: TaskId,
        actor: Option<UserId>,
        kind: ActivityKind,
        details: impl Into<String>,
    ) -> Self {
        Self::new()
            .for_task(task_id)
            .performed_by(actor)
            .action(kind.label())
            .details(details)
    }

    /// Sets the task reference.
    #[must_use]
    pub const fn for_task(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Sets the acting user; `None` marks a system action.
    #[must_use]
    pub const fn performed_by(mut self, actor: Option<UserId>) -> Self {
        self.actor = actor;
        self
    }

    /// Sets the action label.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the free-text details.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Returns the task reference, if set.
    #[must_use]
    pub const fn task_id(&self) -> Option<TaskId> {
        self.task_id
    }
}

/// Immutable record of an action taken on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskActivity {
    id: ActivityId,
    task_id: TaskId,
    actor: Option<UserId>,
    action: String,
    details: String,
    created_at: DateTime<Utc>,
}

impl TaskActivity {
    /// Records a draft at the current clock time.
    ///
    /// A missing action becomes `unknown_action_label`; missing details
    /// become the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ActivityWithoutTask`] when the draft has no
    /// task reference.
    pub fn record(
        draft: ActivityDraft,
        unknown_action_label: &str,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let task_id = draft
            .task_id
            .ok_or(TaskDomainError::ActivityWithoutTask)?;
        Ok(Self {
            id: ActivityId::new(),
            task_id,
            actor: draft.actor,
            action: draft
                .action
                .unwrap_or_else(|| unknown_action_label.to_owned()),
            details: draft.details.unwrap_or_default(),
            created_at: clock.utc(),
        })
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the referenced task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the acting user, `None` for system actions.
    #[must_use]
    pub const fn actor(&self) -> Option<UserId> {
        self.actor
    }

    /// Returns the action label.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the free-text details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
