//! Status counts shown on dashboards.

use super::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Per-status task counts plus the number of delayed tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: u64,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: u64,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: u64,
    /// Unfinished tasks whose due date is before the reference date.
    pub delayed: u64,
}

impl StatusSummary {
    /// Tallies a set of tasks against `reference`.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, reference: NaiveDate) -> Self {
        tasks.into_iter().fold(Self::default(), |mut summary, task| {
            match task.status() {
                TaskStatus::Pending => summary.pending += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Completed => summary.completed += 1,
            }
            if task.is_delayed(reference) {
                summary.delayed += 1;
            }
            summary
        })
    }
}
