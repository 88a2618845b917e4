//! Error types for task domain validation and parsing.

use super::{TaskId, TaskState};
use thiserror::Error;

/// Errors returned while constructing or mutating tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task is not in the state the transition starts from.
    #[error("task {task_id} cannot move from {from} to {to}")]
    InvalidStateTransition {
        /// Task the transition was attempted on.
        task_id: TaskId,
        /// Current state of the task.
        from: TaskState,
        /// Requested target state.
        to: TaskState,
    },
}

/// Error returned while parsing task states.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task state: {0}")]
pub struct ParseTaskStateError(pub String);
