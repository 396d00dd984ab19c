//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod activity;
pub mod comment;
pub mod repository;

pub use activity::ActivityLog;
pub use comment::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
