//! Task aggregate root.

use super::{NoteEntry, TaskDomainError, TaskId, TaskName, TaskNotes, TaskState, Transition};
use crate::application::domain::AppAcronym;
use crate::identity::domain::Username;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: Option<String>,
    notes: TaskNotes,
    app_acronym: AppAcronym,
    state: TaskState,
    creator: Username,
    owner: Username,
    created_at: DateTime<Utc>,
}

/// Parameter object for minting a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Identifier minted from the application's running number.
    pub id: TaskId,
    /// Task name.
    pub name: TaskName,
    /// Optional description.
    pub description: Option<String>,
    /// Owning application.
    pub app_acronym: AppAcronym,
    /// Creating user, who also becomes the first owner.
    pub creator: Username,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted note log.
    pub notes: TaskNotes,
    /// Owning application.
    pub app_acronym: AppAcronym,
    /// Persisted lifecycle state.
    pub state: TaskState,
    /// Creating user.
    pub creator: Username,
    /// Current owner.
    pub owner: Username,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task in [`TaskState::Open`] owned by its creator, with a
    /// creation note as its first log entry.
    #[must_use]
    pub fn create(new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let NewTask {
            id,
            name,
            description,
            app_acronym,
            creator,
        } = new_task;

        Self {
            id,
            name,
            description,
            notes: TaskNotes::starting_with(NoteEntry::created(&creator, timestamp)),
            app_acronym,
            state: TaskState::Open,
            owner: creator.clone(),
            creator,
            created_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            notes: data.notes,
            app_acronym: data.app_acronym,
            state: data.state,
            creator: data.creator,
            owner: data.owner,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the note log.
    #[must_use]
    pub const fn notes(&self) -> &TaskNotes {
        &self.notes
    }

    /// Returns the owning application.
    #[must_use]
    pub const fn app_acronym(&self) -> &AppAcronym {
        &self.app_acronym
    }

    /// Returns the task lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the creating user.
    #[must_use]
    pub const fn creator(&self) -> &Username {
        &self.creator
    }

    /// Returns the current owner.
    #[must_use]
    pub const fn owner(&self) -> &Username {
        &self.owner
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Applies a state transition on behalf of `actor`.
    ///
    /// On success the state moves to the transition target, the actor
    /// becomes owner, and a note entry is prepended.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] when the task is
    /// not in the transition's starting state. The task is left unchanged.
    pub fn apply_transition(
        &mut self,
        transition: Transition,
        actor: &Username,
        remark: Option<&str>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if !transition.starts_from(self.state) {
            return Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id.clone(),
                from: self.state,
                to: transition.target(),
            });
        }

        let entry = NoteEntry::transition(
            actor,
            &self.name,
            transition.source(),
            transition.target(),
            clock.utc(),
            remark,
        );
        self.notes.prepend(entry);
        self.state = transition.target();
        self.owner = actor.clone();
        Ok(())
    }
}
