//! Wire field validation for action request bodies.
//!
//! All mandatory fields are checked for presence before any is checked for
//! type, so a body missing one field and mistyping another reports
//! [`FieldError::Missing`]. `null` counts as present but mistyped.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::application::domain::AppAcronym;
use crate::identity::domain::Credentials;
use crate::task::{
    domain::TaskId,
    services::{CreateTaskCommand, PromoteTaskCommand, TasksByStateQuery},
};

/// Caller's account name.
pub const USERNAME: &str = "username";
/// Caller's plaintext password.
pub const PASSWORD: &str = "password";
/// Name of the task to create.
pub const TASK_NAME: &str = "Task_name";
/// Owning application acronym.
pub const TASK_APP_ACRONYM: &str = "Task_app_Acronym";
/// Optional task description.
pub const TASK_DESCRIPTION: &str = "Task_description";
/// State to list.
pub const TASK_STATE: &str = "Task_state";
/// Task to promote.
pub const TASK_ID: &str = "Task_id";
/// Optional remark for the transition note.
pub const TASK_NOTES: &str = "Task_notes";

/// Request body validation failures.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A mandatory field is absent.
    #[error("missing mandatory field")]
    Missing,
    /// A field is present with a non-string value.
    #[error("field has an invalid type")]
    InvalidType,
}

/// Parses a `CreateTask` body.
///
/// # Errors
///
/// Returns [`FieldError`] when a mandatory field is missing or any field
/// has the wrong type.
pub fn parse_create_task(body: &Map<String, Value>) -> Result<CreateTaskCommand, FieldError> {
    let [username, password, task_name, acronym] =
        mandatory(body, [USERNAME, PASSWORD, TASK_NAME, TASK_APP_ACRONYM])?;
    Ok(CreateTaskCommand {
        credentials: Credentials::new(username, password),
        app_acronym: AppAcronym::new(acronym),
        task_name: task_name.to_owned(),
        description: optional(body, TASK_DESCRIPTION)?,
    })
}

/// Parses a `GetTaskbyState` body.
///
/// # Errors
///
/// Returns [`FieldError`] when a mandatory field is missing or mistyped.
pub fn parse_tasks_by_state(body: &Map<String, Value>) -> Result<TasksByStateQuery, FieldError> {
    let [username, password, state, acronym] =
        mandatory(body, [USERNAME, PASSWORD, TASK_STATE, TASK_APP_ACRONYM])?;
    Ok(TasksByStateQuery {
        credentials: Credentials::new(username, password),
        app_acronym: AppAcronym::new(acronym),
        state: state.to_owned(),
    })
}

/// Parses a `PromoteTask2Done` body.
///
/// # Errors
///
/// Returns [`FieldError`] when a mandatory field is missing or any field
/// has the wrong type.
pub fn parse_promote_task(body: &Map<String, Value>) -> Result<PromoteTaskCommand, FieldError> {
    let [username, password, task_id, acronym] =
        mandatory(body, [USERNAME, PASSWORD, TASK_ID, TASK_APP_ACRONYM])?;
    Ok(PromoteTaskCommand {
        credentials: Credentials::new(username, password),
        app_acronym: AppAcronym::new(acronym),
        task_id: TaskId::new(task_id),
        notes: optional(body, TASK_NOTES)?,
    })
}

fn mandatory<'a, const N: usize>(
    body: &'a Map<String, Value>,
    names: [&str; N],
) -> Result<[&'a str; N], FieldError> {
    if names.iter().any(|name| !body.contains_key(*name)) {
        return Err(FieldError::Missing);
    }
    let mut values = [""; N];
    for (slot, name) in values.iter_mut().zip(names) {
        *slot = body
            .get(name)
            .and_then(Value::as_str)
            .ok_or(FieldError::InvalidType)?;
    }
    Ok(values)
}

/// Absent, `null` and `""` all mean "not supplied".
fn optional(body: &Map<String, Value>, name: &str) -> Result<Option<String>, FieldError> {
    match body.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(FieldError::InvalidType),
    }
}
