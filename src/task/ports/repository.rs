//! Repository port for task persistence and lookup.

use crate::application::domain::{AppAcronym, RunningNumber};
use crate::task::domain::{Task, TaskId, TaskState};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Running-number advance claimed by a task creation.
///
/// `previous` is the counter value the task identifier was minted from; the
/// claim only succeeds while the application still holds that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningNumberClaim {
    /// Counter value read before minting.
    pub previous: RunningNumber,
    /// Counter value embedded in the new task identifier.
    pub next: RunningNumber,
}

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task and advances its application's running number in
    /// one atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::RunningNumberConflict`] when the
    /// application counter no longer equals `claim.previous`,
    /// [`TaskRepositoryError::DuplicateTask`] when the identifier is taken,
    /// or [`TaskRepositoryError::NotInserted`] when no row was written.
    /// Nothing is stored on error.
    async fn create_with_running_number(
        &self,
        task: &Task,
        claim: RunningNumberClaim,
    ) -> TaskRepositoryResult<()>;

    /// Persists the notes, state and owner of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row was updated.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier across all applications.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks of one application currently in `state`, oldest
    /// first.
    async fn find_by_app_and_state(
        &self,
        acronym: &AppAcronym,
        state: TaskState,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The insert affected no rows.
    #[error("task {0} was not inserted")]
    NotInserted(TaskId),

    /// The application counter moved since the identifier was minted.
    #[error("running number of application {acronym} is no longer {expected}")]
    RunningNumberConflict {
        /// Application whose counter was claimed.
        acronym: AppAcronym,
        /// Counter value the claim expected.
        expected: RunningNumber,
    },

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<crate::persistence::BlockingError> for TaskRepositoryError {
    fn from(err: crate::persistence::BlockingError) -> Self {
        Self::persistence(err)
    }
}
