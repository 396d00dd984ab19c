//! Error types for task domain validation and parsing.

use super::TaskId;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description exceeds the configured limit.
    #[error("task description is {actual} characters, limit is {max}")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// No start date was supplied.
    #[error("task start date is required")]
    MissingStartDate,

    /// No due date was supplied.
    #[error("task due date is required")]
    MissingDueDate,

    /// The due date precedes the start date.
    #[error("due date {due} cannot be before start date {start}")]
    DueBeforeStart {
        /// Requested start date.
        start: NaiveDate,
        /// Requested due date.
        due: NaiveDate,
    },

    /// The requested assignee list is empty.
    #[error("at least one assignee is required")]
    NoAssignees,

    /// None of the requested assignees exist in the directory.
    #[error("no valid assignees found")]
    NoResolvableAssignees,

    /// The task is frozen and its status cannot change.
    #[error("task {0} is frozen, status cannot be updated")]
    Frozen(TaskId),

    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyComment,

    /// An activity entry was recorded without a task reference.
    #[error("activity entries must reference a task")]
    ActivityWithoutTask,
}

/// Error returned while parsing task statuses from persistence or requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
