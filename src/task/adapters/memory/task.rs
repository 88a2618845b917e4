//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::application::{
    adapters::memory::{ApplicationTable, InMemoryApplicationRepository},
    domain::AppAcronym,
};
use crate::task::{
    domain::{Task, TaskId, TaskState},
    ports::{RunningNumberClaim, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Shares the application map of an [`InMemoryApplicationRepository`] so a
/// task insert and its running-number advance happen under one pair of
/// locks, always taken applications first.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    applications: ApplicationTable,
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty task repository bound to the given applications.
    #[must_use]
    pub fn new(applications: &InMemoryApplicationRepository) -> Self {
        Self {
            applications: applications.table(),
            tasks: Arc::default(),
        }
    }

    /// Seeds a task without touching any running number.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the identifier is
    /// taken.
    pub fn insert(&self, task: Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        if tasks.contains_key(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }
        tasks.insert(task.id().clone(), task);
        Ok(())
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the lock is poisoned.
    pub fn task_count(&self) -> TaskRepositoryResult<usize> {
        Ok(self.tasks.read().map_err(poisoned)?.len())
    }
}

fn poisoned<T>(err: PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create_with_running_number(
        &self,
        task: &Task,
        claim: RunningNumberClaim,
    ) -> TaskRepositoryResult<()> {
        let mut applications = self.applications.write().map_err(poisoned)?;
        let mut tasks = self.tasks.write().map_err(poisoned)?;

        let conflict = || TaskRepositoryError::RunningNumberConflict {
            acronym: task.app_acronym().clone(),
            expected: claim.previous,
        };
        let application = applications
            .get_mut(task.app_acronym())
            .ok_or_else(conflict)?;
        if application.running_number() != claim.previous {
            return Err(conflict());
        }
        if tasks.contains_key(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id().clone()));
        }

        tasks.insert(task.id().clone(), task.clone());
        application.record_running_number(claim.next);
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        let stored = tasks
            .get_mut(task.id())
            .ok_or_else(|| TaskRepositoryError::NotFound(task.id().clone()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.get(id).cloned())
    }

    async fn find_by_app_and_state(
        &self,
        acronym: &AppAcronym,
        state: TaskState,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        let mut matching: Vec<Task> = tasks
            .values()
            .filter(|task| task.app_acronym() == acronym && task.state() == state)
            .cloned()
            .collect();
        matching.sort_by(|left, right| {
            left.created_at()
                .cmp(&right.created_at())
                .then_with(|| left.id().cmp(right.id()))
        });
        Ok(matching)
    }
}
