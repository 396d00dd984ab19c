//! In-memory task store and activity log sharing one lock.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskActivity, TaskId, TaskStatus},
    ports::{ActivityLog, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task store.
///
/// Tasks and activity entries live behind a single lock so a task write and
/// its paired activity append are applied together.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    activities: Vec<TaskActivity>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn filter_tasks(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| predicate(task))
            .cloned()
            .collect())
    }

    fn count_tasks(&self, predicate: impl Fn(&Task) -> bool) -> TaskRepositoryResult<u64> {
        let state = self.state.read().map_err(poisoned)?;
        let count = state.tasks.values().filter(|task| predicate(task)).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn ensure_paired(task: &Task, activity: &TaskActivity) -> TaskRepositoryResult<()> {
    let task_id = task.id();
    let activity_task = activity.task_id();
    if task_id != activity_task {
        return Err(TaskRepositoryError::ActivityMismatch {
            task: task_id,
            activity_task,
        });
    }
    Ok(())
}

fn is_overdue_unless(task: &Task, date: NaiveDate, excluded: TaskStatus) -> bool {
    task.status() != excluded && task.schedule().due() < date
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn store_with_activity(
        &self,
        task: &Task,
        activity: &TaskActivity,
    ) -> TaskRepositoryResult<()> {
        ensure_paired(task, activity)?;
        let mut state = self.state.write().map_err(poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        state.activities.push(activity.clone());
        Ok(())
    }

    async fn update_with_activity(
        &self,
        task: &Task,
        activity: &TaskActivity,
    ) -> TaskRepositoryResult<()> {
        ensure_paired(task, activity)?;
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        state.activities.push(activity.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_all_active(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.filter_tasks(|task| !task.is_deleted())
    }

    async fn find_by_assignee_id(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.filter_tasks(|task| task.is_assigned(user_id))
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>> {
        self.filter_tasks(|task| task.status() == status)
    }

    async fn find_due_before_excluding_status(
        &self,
        date: NaiveDate,
        excluded: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.filter_tasks(|task| is_overdue_unless(task, date, excluded))
    }

    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64> {
        self.count_tasks(|task| task.status() == status)
    }

    async fn count_due_before_excluding_status(
        &self,
        date: NaiveDate,
        excluded: TaskStatus,
    ) -> TaskRepositoryResult<u64> {
        self.count_tasks(|task| is_overdue_unless(task, date, excluded))
    }
}

#[async_trait]
impl ActivityLog for InMemoryTaskStore {
    async fn append(&self, activity: &TaskActivity) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if !state.tasks.contains_key(&activity.task_id()) {
            return Err(TaskRepositoryError::NotFound(activity.task_id()));
        }
        state.activities.push(activity.clone());
        Ok(())
    }

    async fn list_for_task(&self, task_id: TaskId) -> TaskRepositoryResult<Vec<TaskActivity>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut entries: Vec<TaskActivity> = state
            .activities
            .iter()
            .rev()
            .filter(|entry| entry.task_id() == task_id)
            .cloned()
            .collect();
        // Stable sort keeps latest-appended first among equal timestamps.
        entries.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(entries)
    }
}
