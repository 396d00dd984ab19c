//! Application services for task lifecycle orchestration.

mod access;
mod assignment;
mod audit;
mod comment;
mod error;
mod lifecycle;
mod policy;

pub use assignment::{AssignmentService, ReassignRequest};
pub use audit::AuditLogService;
pub use comment::CommentService;
pub use error::{ErrorKind, TaskLifecycleError, TaskLifecycleResult};
pub use lifecycle::{CreateTaskRequest, TaskLifecycleService};
pub use policy::{TaskPolicy, TaskPolicyError};
