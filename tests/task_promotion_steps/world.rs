//! Shared world state for task promotion BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::api::ActionResponse;
use tasktrack::application::adapters::memory::InMemoryApplicationRepository;
use tasktrack::identity::adapters::{
    memory::InMemoryUserRepository, password::StoredHashVerifier,
};
use tasktrack::notification::{
    adapters::RecordingNotificationSink,
    services::{NotificationDispatcher, NotificationTrigger, NotificationWorker},
};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskCommandService, TrackerPorts},
};

/// Password every scenario user is created with.
pub const PASSWORD: &str = "hunter2";

/// Scenario world for task promotion behaviour tests.
pub struct PromotionWorld {
    pub users: InMemoryUserRepository,
    pub applications: InMemoryApplicationRepository,
    pub tasks: InMemoryTaskRepository,
    pub sink: RecordingNotificationSink,
    pub last_response: Option<ActionResponse>,
}

impl PromotionWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let applications = InMemoryApplicationRepository::new();
        let tasks = InMemoryTaskRepository::new(&applications);
        Self {
            users: InMemoryUserRepository::new(),
            applications,
            tasks,
            sink: RecordingNotificationSink::new(),
            last_response: None,
        }
    }

    /// Builds a service over the world's stores with live notifications.
    ///
    /// Returns the worker so callers can wait for delivery.
    pub fn service(&self) -> (TaskCommandService<DefaultClock>, NotificationWorker) {
        let dispatcher = NotificationDispatcher::new(
            Arc::new(self.users.clone()),
            Arc::new(self.applications.clone()),
            Arc::new(self.sink.clone()),
        );
        let (trigger, worker) = NotificationTrigger::spawn(dispatcher, 4);
        let service = TaskCommandService::new(
            TrackerPorts {
                users: Arc::new(self.users.clone()),
                applications: Arc::new(self.applications.clone()),
                tasks: Arc::new(self.tasks.clone()),
                passwords: Arc::new(StoredHashVerifier::new()),
            },
            trigger,
            Arc::new(DefaultClock),
        );
        (service, worker)
    }
}

impl Default for PromotionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PromotionWorld {
    PromotionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
