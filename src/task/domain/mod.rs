//! Domain model for tasks and their state machine.
//!
//! Tasks are minted per application, advance only through declared
//! [`Transition`]s, and carry an append-only note log with the newest entry
//! first.

mod error;
mod ids;
mod notes;
mod state;
mod task;

pub use error::{ParseTaskStateError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use notes::{NoteEntry, TaskNotes};
pub use state::{TaskState, Transition};
pub use task::{NewTask, PersistedTaskData, Task};
