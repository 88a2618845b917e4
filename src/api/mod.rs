//! Transport-agnostic action boundary.
//!
//! An HTTP layer hands [`ActionDispatcher::dispatch`] the action path and
//! the JSON request body; the dispatcher validates the wire fields, runs the
//! matching command and returns an [`ActionResponse`] carrying a wire status
//! code and an optional payload.

mod dispatch;
mod request;
mod response;
mod status;

pub use dispatch::{ActionDispatcher, ActionRoute};
pub use request::{
    FieldError, PASSWORD, TASK_APP_ACRONYM, TASK_DESCRIPTION, TASK_ID, TASK_NAME, TASK_NOTES,
    TASK_STATE, USERNAME, parse_create_task, parse_promote_task, parse_tasks_by_state,
};
pub use response::{ActionResponse, TaskRecord};
pub use status::ActionStatus;

#[cfg(test)]
mod tests;
