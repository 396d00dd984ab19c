//! In-memory adapters for the task ports.
//!
//! These adapters are thread-safe and suitable for tests and single-process
//! hosts without a database.

mod comment;
mod task;

pub use comment::InMemoryCommentRepository;
pub use task::InMemoryTaskStore;
