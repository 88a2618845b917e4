//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::application::{
    adapters::memory::InMemoryApplicationRepository,
    domain::{ActionPermissions, AppAcronym, Application, RunningNumber},
};
use tasktrack::identity::{
    adapters::{
        memory::InMemoryUserRepository,
        password::{StoredHashVerifier, bcrypt_hash},
    },
    domain::{Credentials, EmailAddress, GroupSet, Permission, User, Username},
};
use tasktrack::notification::{
    adapters::RecordingNotificationSink,
    services::{NotificationDispatcher, NotificationTrigger, NotificationWorker},
};
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskId, TaskName, TaskNotes, TaskState},
    services::{TaskCommandService, TrackerPorts},
};

/// Password shared by every seeded account.
pub const PASSWORD: &str = "secret";

/// Lowest bcrypt cost, keeping seeded hashes quick to verify.
pub const TEST_COST: u32 = 4;

/// Service type used by the integration tests.
pub type TestService = TaskCommandService<DefaultClock>;

/// In-memory stores seeded with two applications and four accounts.
///
/// `APP1` grants create to `pm`, doing to `dev` and done to `lead`, and
/// starts at running number 0. `OPS` grants done to `ops`, which no seeded
/// user belongs to.
#[derive(Debug, Clone)]
pub struct Tracker {
    /// User store.
    pub users: InMemoryUserRepository,
    /// Application store.
    pub applications: InMemoryApplicationRepository,
    /// Task store sharing the application counters.
    pub tasks: InMemoryTaskRepository,
    /// Captures every sent notification.
    pub sink: RecordingNotificationSink,
}

impl Tracker {
    /// Seeds the stores.
    ///
    /// # Panics
    ///
    /// Panics if seeding fails.
    #[must_use]
    pub fn new() -> Self {
        let users = InMemoryUserRepository::new();
        for (name, groups, email, disabled) in [
            ("lena", "lead", Some("lena@example.com"), false),
            ("devon", "dev", Some("devon@example.com"), false),
            ("paula", "pm", None, false),
            ("old_lead", "lead", Some("old@example.com"), true),
        ] {
            let address = email.map(|raw| EmailAddress::new(raw).expect("valid email"));
            users
                .insert(
                    User::new(
                        Username::new(name),
                        bcrypt_hash(PASSWORD, TEST_COST).expect("valid bcrypt cost"),
                        GroupSet::parse(groups),
                    )
                    .with_email(address)
                    .with_disabled(disabled),
                )
                .expect("seed user");
        }

        let applications = InMemoryApplicationRepository::new();
        for (acronym, create, doing, done) in [
            ("APP1", "pm", "dev", "lead"),
            ("OPS", "pm", "dev", "ops"),
        ] {
            applications
                .insert(Application::new(
                    AppAcronym::new(acronym),
                    RunningNumber::new(0),
                    ActionPermissions {
                        create: Permission::from_column(Some(create)),
                        doing: Permission::from_column(Some(doing)),
                        done: Permission::from_column(Some(done)),
                    },
                ))
                .expect("seed application");
        }
        let tasks = InMemoryTaskRepository::new(&applications);

        Self {
            users,
            applications,
            tasks,
            sink: RecordingNotificationSink::new(),
        }
    }

    /// Returns store handles for the command service.
    #[must_use]
    pub fn ports(&self) -> TrackerPorts {
        TrackerPorts {
            users: Arc::new(self.users.clone()),
            applications: Arc::new(self.applications.clone()),
            tasks: Arc::new(self.tasks.clone()),
            passwords: Arc::new(StoredHashVerifier::new()),
        }
    }

    /// Builds a service that drops notifications.
    #[must_use]
    pub fn service(&self) -> TestService {
        TaskCommandService::new(
            self.ports(),
            NotificationTrigger::disabled(),
            Arc::new(DefaultClock),
        )
    }

    /// Builds a service delivering notifications to [`Self::sink`].
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn notifying_service(&self) -> (TestService, NotificationWorker) {
        let dispatcher = NotificationDispatcher::new(
            Arc::new(self.users.clone()),
            Arc::new(self.applications.clone()),
            Arc::new(self.sink.clone()),
        )
        .with_sender(EmailAddress::new("tracker@example.com").ok());
        let (trigger, worker) = NotificationTrigger::spawn(dispatcher, 4);
        let service = TaskCommandService::new(self.ports(), trigger, Arc::new(DefaultClock));
        (service, worker)
    }

    /// Stores a task of `app` directly in `state`.
    ///
    /// # Panics
    ///
    /// Panics if the task cannot be stored.
    pub fn seed_task(&self, id: &str, app: &str, state: TaskState) -> Task {
        let task = Task::from_persisted(PersistedTaskData {
            id: TaskId::new(id),
            name: TaskName::new(format!("Task {id}")).expect("valid name"),
            description: None,
            notes: TaskNotes::from_persisted(Some("Task created by paula on 2026-01-05".to_owned())),
            app_acronym: AppAcronym::new(app),
            state,
            creator: Username::new("paula"),
            owner: Username::new("paula"),
            created_at: chrono::Utc::now(),
        });
        self.tasks.insert(task.clone()).expect("seed task");
        task
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides freshly seeded stores for each test.
#[fixture]
pub fn tracker() -> Tracker {
    Tracker::new()
}

/// Credentials for a seeded account.
#[must_use]
pub fn login(username: &str) -> Credentials {
    Credentials::new(username, PASSWORD)
}
