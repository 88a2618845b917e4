//! Command-line entry point for the task tracker.
//!
//! ```text
//! tasktrack hash-password <PASSWORD>
//! tasktrack dispatch <ACTION> < body.json
//! ```
//!
//! `dispatch` reads one JSON request body from stdin, runs the action
//! against `PostgreSQL` and writes the JSON response to stdout. Settings are
//! read from `TASK_TRACKER_*` environment variables.

use std::ffi::OsString;
use std::io::{self, Read, Write};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use mockable::DefaultClock;
use serde_json::Value;
use tokio::runtime::Builder;
use tracing::info;

use tasktrack::api::ActionDispatcher;
use tasktrack::application::adapters::postgres::PostgresApplicationRepository;
use tasktrack::config::TrackerSettings;
use tasktrack::identity::adapters::{
    password::{DEFAULT_BCRYPT_COST, StoredHashVerifier, bcrypt_hash},
    postgres::PostgresUserRepository,
};
use tasktrack::identity::domain::EmailAddress;
use tasktrack::notification::{
    adapters::TracingNotificationSink,
    services::{NotificationDispatcher, NotificationTrigger},
};
use tasktrack::persistence::build_pool;
use tasktrack::task::{
    adapters::postgres::PostgresTaskRepository,
    services::{TaskCommandService, TrackerPorts},
};
use tasktrack::telemetry::init_tracing;

/// `tasktrack` command arguments.
#[derive(Debug, Parser)]
#[command(name = "tasktrack", about = "Permission-gated task tracking", version)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a bcrypt hash for a plaintext password.
    HashPassword {
        /// Plaintext password to hash.
        password: String,
        /// bcrypt cost factor.
        #[arg(long, default_value_t = DEFAULT_BCRYPT_COST)]
        cost: u32,
    },
    /// Run one action with a JSON body read from stdin.
    Dispatch {
        /// Action path, for example `/CreateTask`.
        action: String,
    },
}

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    match args.command {
        Command::HashPassword { password, cost } => {
            let hash = bcrypt_hash(&password, cost)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;
            writeln!(io::stdout().lock(), "{}", hash.as_str())
        }
        Command::Dispatch { action } => {
            let runtime = Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
            runtime.block_on(dispatch(&action))
        }
    }
}

async fn dispatch(action: &str) -> io::Result<()> {
    init_tracing();
    let settings = TrackerSettings::load_from_iter([OsString::from("tasktrack")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;

    let database_url = settings.database_url().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TASK_TRACKER_DATABASE_URL must be set",
        )
    })?;
    let sender = settings
        .notification_from()
        .map(EmailAddress::new)
        .transpose()
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;
    let body: Value = serde_json::from_str(&raw)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    let pool = build_pool(database_url, settings.pool_max_size())
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let applications = Arc::new(PostgresApplicationRepository::new(pool.clone()));
    let tasks = Arc::new(PostgresTaskRepository::new(pool));

    let notifications = NotificationDispatcher::new(
        users.clone(),
        applications.clone(),
        Arc::new(TracingNotificationSink::new()),
    )
    .with_sender(sender);
    let (trigger, worker) =
        NotificationTrigger::spawn(notifications, settings.notification_queue_capacity());

    let dispatcher = ActionDispatcher::new(TaskCommandService::new(
        TrackerPorts {
            users,
            applications,
            tasks,
            passwords: Arc::new(StoredHashVerifier::new()),
        },
        trigger,
        Arc::new(DefaultClock),
    ));
    let response = dispatcher.dispatch(action, &body).await;
    drop(dispatcher);
    worker.join().await;

    info!(action, code = response.status().code(), "action finished");
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).map_err(io::Error::other)?;
    writeln!(stdout)
}
