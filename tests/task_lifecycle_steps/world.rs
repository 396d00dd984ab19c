//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use worknest::{
    task::{
        adapters::memory::InMemoryTaskStore,
        domain::Task,
        services::{AuditLogService, TaskLifecycleError, TaskLifecycleService},
    },
    user::{adapters::memory::InMemoryUserDirectory, domain::User},
};

/// Lifecycle service type used by the BDD world.
pub type TestLifecycle =
    TaskLifecycleService<InMemoryTaskStore, InMemoryUserDirectory, DefaultClock>;

/// Audit service type used by the BDD world.
pub type TestAudit = AuditLogService<InMemoryTaskStore, DefaultClock>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub directory: Arc<InMemoryUserDirectory>,
    pub lifecycle: TestLifecycle,
    pub audit: TestAudit,
    pub member: Option<User>,
    pub task: Option<Task>,
    pub last_status_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryTaskStore::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let clock = Arc::new(DefaultClock);

        Self {
            lifecycle: TaskLifecycleService::new(
                Arc::clone(&store),
                Arc::clone(&directory),
                Arc::clone(&clock),
            ),
            audit: AuditLogService::new(store, clock),
            directory,
            member: None,
            task: None,
            last_status_result: None,
        }
    }

    /// Returns the scenario task or fails the step.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the scenario member or fails the step.
    pub fn member(&self) -> Result<&User, eyre::Report> {
        self.member
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing member in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
