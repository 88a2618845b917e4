//! Command handlers for creating, listing and promoting tasks.
//!
//! Every handler runs the same front half: verify credentials, reject
//! disabled accounts, then load the application. Any failure short-circuits
//! with a [`TaskCommandError`] and leaves the store untouched.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::{
    domain::{AppAcronym, Application, ApplicationDomainError, PermissionField},
    ports::ApplicationRepository,
};
use crate::identity::{
    domain::{Credentials, User},
    ports::{PasswordVerifier, UserRepository},
    services::{CredentialError, CredentialVerifier, authorize},
};
use crate::notification::{domain::PromotionNotice, services::NotificationTrigger};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId, TaskName, TaskState, Transition},
    ports::{RunningNumberClaim, TaskRepository, TaskRepositoryError},
};

type SharedError = Arc<dyn std::error::Error + Send + Sync>;

/// Store handles shared by every handler.
#[derive(Clone)]
pub struct TrackerPorts {
    /// User lookups.
    pub users: Arc<dyn UserRepository>,
    /// Application lookups.
    pub applications: Arc<dyn ApplicationRepository>,
    /// Task storage.
    pub tasks: Arc<dyn TaskRepository>,
    /// Password hash comparison.
    pub passwords: Arc<dyn PasswordVerifier>,
}

/// Input for [`TaskCommandService::create_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskCommand {
    /// Caller credentials.
    pub credentials: Credentials,
    /// Application the task belongs to.
    pub app_acronym: AppAcronym,
    /// Raw task name; must not be empty.
    pub task_name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Input for [`TaskCommandService::tasks_by_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksByStateQuery {
    /// Caller credentials.
    pub credentials: Credentials,
    /// Application to list.
    pub app_acronym: AppAcronym,
    /// Raw state name; must match one of the five states exactly.
    pub state: String,
}

/// Input for [`TaskCommandService::promote_to_done`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteTaskCommand {
    /// Caller credentials.
    pub credentials: Credentials,
    /// Application whose Done group authorizes the promotion.
    pub app_acronym: AppAcronym,
    /// Task to promote.
    pub task_id: TaskId,
    /// Optional remark appended to the transition note.
    pub notes: Option<String>,
}

/// Reason a task could not be created.
#[derive(Debug, Clone, Error)]
pub enum CreateFailure {
    /// The task name was empty.
    #[error(transparent)]
    InvalidName(TaskDomainError),
    /// The application counter cannot mint another identifier.
    #[error(transparent)]
    RunningNumber(ApplicationDomainError),
    /// The store rejected the insert or the counter advance.
    #[error(transparent)]
    Store(TaskRepositoryError),
}

/// Failures of the task command handlers, one per reported status.
#[derive(Debug, Clone, Error)]
pub enum TaskCommandError {
    /// Unknown user or wrong password.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The account is disabled.
    #[error("account is disabled")]
    AccountDisabled,
    /// The application does not exist.
    #[error("application not found: {0}")]
    ApplicationNotFound(AppAcronym),
    /// The user lacks the group required for the action.
    #[error("user is not authorized for this action")]
    NotAuthorized,
    /// The requested state name is not a known state.
    #[error("invalid task state: {0}")]
    InvalidState(String),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The task is not in the transition's starting state.
    #[error(transparent)]
    InvalidStateTransition(TaskDomainError),
    /// The task could not be created.
    #[error("task creation failed: {0}")]
    CreateFailed(CreateFailure),
    /// The promoted task could not be saved.
    #[error("task update failed: {0}")]
    UpdateFailed(TaskRepositoryError),
    /// A read needed by the pipeline failed.
    #[error("query failed: {0}")]
    QueryFailed(SharedError),
}

impl TaskCommandError {
    fn query_failed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        error!(error = %err, "store read failed");
        Self::QueryFailed(Arc::new(err))
    }
}

/// Result type for task command handlers.
pub type TaskCommandResult<T> = Result<T, TaskCommandError>;

/// Orchestrates the task command pipelines.
pub struct TaskCommandService<C>
where
    C: Clock + Send + Sync,
{
    verifier: CredentialVerifier,
    applications: Arc<dyn ApplicationRepository>,
    tasks: Arc<dyn TaskRepository>,
    notifier: NotificationTrigger,
    clock: Arc<C>,
}

impl<C> Clone for TaskCommandService<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            applications: Arc::clone(&self.applications),
            tasks: Arc::clone(&self.tasks),
            notifier: self.notifier.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> TaskCommandService<C>
where
    C: Clock + Send + Sync,
{
    /// Creates the service over the given ports.
    #[must_use]
    pub fn new(ports: TrackerPorts, notifier: NotificationTrigger, clock: Arc<C>) -> Self {
        let TrackerPorts {
            users,
            applications,
            tasks,
            passwords,
        } = ports;
        Self {
            verifier: CredentialVerifier::new(users, passwords),
            applications,
            tasks,
            notifier,
            clock,
        }
    }

    /// Creates a task in `Open` and returns it.
    ///
    /// The identifier is the acronym followed by the application's next
    /// running number; the insert and the counter advance are one store
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::CreateFailed`] for an empty name or a
    /// store rejection, and the shared pipeline errors otherwise.
    pub async fn create_task(&self, command: CreateTaskCommand) -> TaskCommandResult<Task> {
        let CreateTaskCommand {
            credentials,
            app_acronym,
            task_name,
            description,
        } = command;

        let (user, application) = self.authenticate(&credentials, &app_acronym).await?;
        Self::require_permission(&user, &application, PermissionField::Create)?;

        let name = TaskName::new(task_name).map_err(|err| {
            debug!(app_acronym = %app_acronym, "rejected empty task name");
            TaskCommandError::CreateFailed(CreateFailure::InvalidName(err))
        })?;
        let next = application.next_running_number().map_err(|err| {
            error!(app_acronym = %app_acronym, error = %err, "running number exhausted");
            TaskCommandError::CreateFailed(CreateFailure::RunningNumber(err))
        })?;
        let claim = RunningNumberClaim {
            previous: application.running_number(),
            next,
        };

        let task = Task::create(
            NewTask {
                id: TaskId::compose(&app_acronym, next),
                name,
                description: description.filter(|text| !text.is_empty()),
                app_acronym,
                creator: user.username().clone(),
            },
            &*self.clock,
        );

        self.tasks
            .create_with_running_number(&task, claim)
            .await
            .map_err(|err| {
                error!(task_id = %task.id(), error = %err, "task insert failed");
                TaskCommandError::CreateFailed(CreateFailure::Store(err))
            })?;

        info!(
            task_id = %task.id(),
            app_acronym = %task.app_acronym(),
            creator = %task.creator(),
            "task created"
        );
        Ok(task)
    }

    /// Lists an application's tasks in the given state.
    ///
    /// Any authenticated, enabled user may list tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::InvalidState`] for an unknown state name
    /// before any task query, [`TaskCommandError::QueryFailed`] when the
    /// store read fails, and the shared pipeline errors otherwise.
    pub async fn tasks_by_state(&self, query: TasksByStateQuery) -> TaskCommandResult<Vec<Task>> {
        let TasksByStateQuery {
            credentials,
            app_acronym,
            state,
        } = query;

        self.authenticate(&credentials, &app_acronym).await?;
        let parsed = TaskState::try_from(state.as_str()).map_err(|err| {
            debug!(state = %err.0, "rejected unknown task state");
            TaskCommandError::InvalidState(err.0)
        })?;

        let tasks = self
            .tasks
            .find_by_app_and_state(&app_acronym, parsed)
            .await
            .map_err(TaskCommandError::query_failed)?;
        debug!(
            app_acronym = %app_acronym,
            state = %parsed,
            count = tasks.len(),
            "tasks listed"
        );
        Ok(tasks)
    }

    /// Moves a task from `Doing` to `Done` and notifies the Done group of
    /// the task's own application.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCommandError::TaskNotFound`],
    /// [`TaskCommandError::InvalidStateTransition`] or
    /// [`TaskCommandError::UpdateFailed`] for task-level failures, and the
    /// shared pipeline errors otherwise.
    pub async fn promote_to_done(&self, command: PromoteTaskCommand) -> TaskCommandResult<Task> {
        let PromoteTaskCommand {
            credentials,
            app_acronym,
            task_id,
            notes,
        } = command;

        let task = self
            .apply_transition(
                Transition::DOING_TO_DONE,
                &credentials,
                &app_acronym,
                &task_id,
                notes.as_deref().filter(|text| !text.is_empty()),
            )
            .await?;

        self.notifier.notify(PromotionNotice::new(
            task.name().clone(),
            task.app_acronym().clone(),
        ));
        Ok(task)
    }

    async fn apply_transition(
        &self,
        transition: Transition,
        credentials: &Credentials,
        app_acronym: &AppAcronym,
        task_id: &TaskId,
        remark: Option<&str>,
    ) -> TaskCommandResult<Task> {
        let (user, application) = self.authenticate(credentials, app_acronym).await?;
        Self::require_permission(&user, &application, transition.permission())?;

        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await
            .map_err(TaskCommandError::query_failed)?
            .ok_or_else(|| {
                debug!(task_id = %task_id, "task not found");
                TaskCommandError::TaskNotFound(task_id.clone())
            })?;

        task.apply_transition(transition, user.username(), remark, &*self.clock)
            .map_err(|err| {
                debug!(task_id = %task_id, error = %err, "rejected state transition");
                TaskCommandError::InvalidStateTransition(err)
            })?;

        self.tasks.update(&task).await.map_err(|err| {
            error!(task_id = %task_id, error = %err, "task update failed");
            TaskCommandError::UpdateFailed(err)
        })?;

        info!(
            task_id = %task.id(),
            from = %transition.source(),
            to = %transition.target(),
            owner = %task.owner(),
            "task transitioned"
        );
        Ok(task)
    }

    /// Verifies credentials, rejects disabled accounts and loads the
    /// application, in that order.
    async fn authenticate(
        &self,
        credentials: &Credentials,
        app_acronym: &AppAcronym,
    ) -> TaskCommandResult<(User, Application)> {
        let user = match self.verifier.verify(credentials).await {
            Ok(user) => user,
            Err(CredentialError::NoMatch) => {
                debug!(username = %credentials.username(), "rejected credentials");
                return Err(TaskCommandError::InvalidCredentials);
            }
            Err(err) => return Err(TaskCommandError::query_failed(err)),
        };
        if user.is_disabled() {
            debug!(username = %user.username(), "rejected disabled account");
            return Err(TaskCommandError::AccountDisabled);
        }

        let application = self
            .applications
            .find_by_acronym(app_acronym)
            .await
            .map_err(TaskCommandError::query_failed)?
            .ok_or_else(|| {
                debug!(app_acronym = %app_acronym, "application not found");
                TaskCommandError::ApplicationNotFound(app_acronym.clone())
            })?;
        Ok((user, application))
    }

    fn require_permission(
        user: &User,
        application: &Application,
        field: PermissionField,
    ) -> TaskCommandResult<()> {
        if authorize(user, application.permission(field)) {
            return Ok(());
        }
        debug!(
            username = %user.username(),
            app_acronym = %application.acronym(),
            permission = %field,
            "user not authorized"
        );
        Err(TaskCommandError::NotAuthorized)
    }
}
