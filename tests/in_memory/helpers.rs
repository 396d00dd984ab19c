//! Shared test helpers for in-memory task workflow integration tests.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use worknest::{
    task::{
        adapters::memory::{InMemoryCommentRepository, InMemoryTaskStore},
        domain::{Actor, Task},
        services::{
            AssignmentService, AuditLogService, CommentService, CreateTaskRequest,
            TaskLifecycleService,
        },
    },
    user::{
        adapters::memory::InMemoryUserDirectory,
        domain::{NewUser, Role, User},
        ports::UserDirectory,
    },
};

/// Lifecycle service over in-memory adapters.
pub type Lifecycle = TaskLifecycleService<InMemoryTaskStore, InMemoryUserDirectory, DefaultClock>;

/// Assignment service over in-memory adapters.
pub type Assignment = AssignmentService<
    InMemoryTaskStore,
    InMemoryUserDirectory,
    InMemoryCommentRepository,
    DefaultClock,
>;

/// Audit log service over the in-memory task store.
pub type Audit = AuditLogService<InMemoryTaskStore, DefaultClock>;

/// Comment service over in-memory adapters.
pub type Comments = CommentService<InMemoryTaskStore, InMemoryCommentRepository, DefaultClock>;

/// Every task service wired over one set of stores.
pub struct Services {
    /// User directory shared by all services.
    pub directory: Arc<InMemoryUserDirectory>,
    /// Task lifecycle operations.
    pub lifecycle: Lifecycle,
    /// Assignment and reassignment.
    pub assignment: Assignment,
    /// Activity trail reads.
    pub audit: Audit,
    /// Task comments.
    pub comments: Comments,
}

impl Services {
    /// Registers a user in the shared directory.
    pub async fn user(&self, name: &str, role: Role) -> User {
        self.directory
            .create(NewUser::new(name, role).expect("valid user request"))
            .await
            .expect("user registration should succeed")
    }

    /// Creates a task running from 1 to 10 March 2024 as the system actor.
    pub async fn task(&self, title: &str, assignees: &[&User]) -> Task {
        let request = CreateTaskRequest::new(title)
            .with_assignees(assignees.iter().map(|user| user.id()))
            .with_dates(date(2024, 3, 1), date(2024, 3, 10));
        self.lifecycle
            .create(&Actor::System, request)
            .await
            .expect("task creation should succeed")
    }
}

/// Provides a fresh set of services for each test.
#[fixture]
pub fn services() -> Services {
    let store = Arc::new(InMemoryTaskStore::new());
    let directory = Arc::new(InMemoryUserDirectory::new());
    let comments = Arc::new(InMemoryCommentRepository::new());
    let clock = Arc::new(DefaultClock);

    Services {
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&store),
            Arc::clone(&directory),
            Arc::clone(&clock),
        ),
        assignment: AssignmentService::new(
            Arc::clone(&store),
            Arc::clone(&directory),
            Arc::clone(&comments),
            Arc::clone(&clock),
        ),
        audit: AuditLogService::new(Arc::clone(&store), Arc::clone(&clock)),
        comments: CommentService::new(store, comments, clock),
        directory,
    }
}

/// Builds a calendar date for test data.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
