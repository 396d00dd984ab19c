//! Task aggregate root.

use super::{AssigneeSet, Schedule, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::user::domain::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Tasks are never erased. Soft deletion only flips [`Task::is_deleted`], so
/// the record, its comments and its activity trail stay addressable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    status: TaskStatus,
    schedule: Schedule,
    assignees: AssigneeSet,
    frozen: bool,
    deleted: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task title.
    pub title: TaskTitle,
    /// Optional description.
    pub description: Option<TaskDescription>,
    /// Start and due dates.
    pub schedule: Schedule,
    /// Initial assignees.
    pub assignees: AssigneeSet,
}

impl Task {
    /// Creates a pending, unfrozen, active task.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: TaskStatus::Pending,
            schedule: data.schedule,
            assignees: data.assignees,
            frozen: false,
            deleted: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the start and due dates.
    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// Returns the assignee set.
    #[must_use]
    pub const fn assignees(&self) -> &AssigneeSet {
        &self.assignees
    }

    /// Returns `true` when status changes are blocked.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns `true` when the task is hidden from default listings.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when `user_id` is assigned to this task.
    #[must_use]
    pub fn is_assigned(&self, user_id: UserId) -> bool {
        self.assignees.contains(user_id)
    }

    /// Returns `true` when the task is unfinished and its due date is
    /// strictly before `reference`.
    #[must_use]
    pub fn is_delayed(&self, reference: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.schedule.is_past_due(reference)
    }

    /// Sets the status.
    ///
    /// No transition graph applies: any status may follow any other,
    /// including the current one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Frozen`] when the task is frozen, whatever
    /// the requested status.
    pub fn update_status(
        &mut self,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if self.frozen {
            return Err(TaskDomainError::Frozen(self.id));
        }
        self.status = status;
        self.touch(clock);
        Ok(())
    }

    /// Flips the freeze flag and returns the resulting value.
    pub fn toggle_freeze(&mut self, clock: &impl Clock) -> bool {
        self.frozen = !self.frozen;
        self.touch(clock);
        self.frozen
    }

    /// Hides the task from default listings.
    pub fn soft_delete(&mut self, clock: &impl Clock) {
        self.deleted = true;
        self.touch(clock);
    }

    /// Returns a soft-deleted task to default listings.
    pub fn restore(&mut self, clock: &impl Clock) {
        self.deleted = false;
        self.touch(clock);
    }

    /// Replaces the whole assignee set.
    ///
    /// Freezing does not block reassignment.
    pub fn replace_assignees(&mut self, assignees: AssigneeSet, clock: &impl Clock) {
        self.assignees = assignees;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
