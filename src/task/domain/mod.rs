//! Domain model for task lifecycle management.
//!
//! The task domain models creation, assignment, status changes, freezing,
//! soft deletion, comments and the activity trail while keeping all
//! infrastructure concerns outside of the domain boundary.

mod activity;
mod actor;
mod assignees;
mod comment;
mod error;
mod ids;
mod schedule;
mod status;
mod summary;
mod task;
mod text;

pub use activity::{ActivityDraft, ActivityKind, TaskActivity};
pub use actor::Actor;
pub use assignees::AssigneeSet;
pub use comment::Comment;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{ActivityId, CommentId, TaskId};
pub use schedule::Schedule;
pub use status::TaskStatus;
pub use summary::StatusSummary;
pub use task::{NewTaskData, Task};
pub use text::{TaskDescription, TaskTitle};
