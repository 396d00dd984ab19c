//! Shared fixtures for task service tests.

use std::sync::{Arc, Mutex};

use crate::task::{
    adapters::memory::{InMemoryCommentRepository, InMemoryTaskStore},
    domain::{Actor, Task},
    services::{
        AssignmentService, AuditLogService, CommentService, CreateTaskRequest,
        TaskLifecycleService,
    },
};
use crate::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{NewUser, Role, User},
    ports::UserDirectory,
};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid start instant");
        Self::starting_at(start)
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.now.lock().expect("clock lock");
        let current = *now;
        *now = current + Duration::seconds(1);
        current
    }
}

pub type TestLifecycle =
    TaskLifecycleService<InMemoryTaskStore, InMemoryUserDirectory, SteppingClock>;
pub type TestAssignment = AssignmentService<
    InMemoryTaskStore,
    InMemoryUserDirectory,
    InMemoryCommentRepository,
    SteppingClock,
>;
pub type TestAudit = AuditLogService<InMemoryTaskStore, SteppingClock>;
pub type TestComments =
    CommentService<InMemoryTaskStore, InMemoryCommentRepository, SteppingClock>;

/// All task services wired over shared in-memory stores.
pub struct Harness {
    pub directory: Arc<InMemoryUserDirectory>,
    pub lifecycle: TestLifecycle,
    pub assignment: TestAssignment,
    pub audit: TestAudit,
    pub comments: TestComments,
}

impl Harness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let comment_store = Arc::new(InMemoryCommentRepository::new());
        let clock = Arc::new(SteppingClock::default());

        Self {
            lifecycle: TaskLifecycleService::new(
                Arc::clone(&store),
                Arc::clone(&directory),
                Arc::clone(&clock),
            ),
            assignment: AssignmentService::new(
                Arc::clone(&store),
                Arc::clone(&directory),
                Arc::clone(&comment_store),
                Arc::clone(&clock),
            ),
            audit: AuditLogService::new(Arc::clone(&store), Arc::clone(&clock)),
            comments: CommentService::new(store, comment_store, clock),
            directory,
        }
    }

    pub async fn add_user(&self, name: &str, role: Role) -> User {
        self.directory
            .create(NewUser::new(name, role).expect("valid user request"))
            .await
            .expect("user creation should succeed")
    }

    pub async fn create_task(&self, title: &str, assignees: &[&User]) -> Task {
        let request = CreateTaskRequest::new(title)
            .with_assignees(assignees.iter().map(|user| user.id()))
            .with_dates(date(2024, 1, 1), date(2024, 1, 10));
        self.lifecycle
            .create(&Actor::System, request)
            .await
            .expect("task creation should succeed")
    }
}

#[fixture]
pub fn harness() -> Harness {
    Harness::new()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
