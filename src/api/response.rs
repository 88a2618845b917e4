//! Action response payloads.

use serde::Serialize;

use super::ActionStatus;
use crate::task::domain::Task;

const CREATE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire response: a status code plus an optional payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    #[serde(rename = "code")]
    status: ActionStatus,
    #[serde(rename = "Task_id", skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<TaskRecord>>,
}

impl ActionResponse {
    /// Response carrying only a status.
    #[must_use]
    pub const fn status_only(status: ActionStatus) -> Self {
        Self {
            status,
            task_id: None,
            data: None,
        }
    }

    /// Successful create, echoing the new identifier.
    #[must_use]
    pub fn created(task: &Task) -> Self {
        Self {
            task_id: Some(task.id().as_str().to_owned()),
            ..Self::status_only(ActionStatus::Success)
        }
    }

    /// Successful listing.
    #[must_use]
    pub fn listed(tasks: &[Task]) -> Self {
        Self {
            data: Some(tasks.iter().map(TaskRecord::from).collect()),
            ..Self::status_only(ActionStatus::Success)
        }
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> ActionStatus {
        self.status
    }

    /// Returns the created task identifier, if any.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    /// Returns the listed task rows, if any.
    #[must_use]
    pub fn data(&self) -> Option<&[TaskRecord]> {
        self.data.as_deref()
    }
}

/// Task row as exposed on the wire, keyed by the stored column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    /// Task identifier.
    #[serde(rename = "Task_id")]
    pub id: String,
    /// Task name.
    #[serde(rename = "Task_name")]
    pub name: String,
    /// Description or `null`.
    #[serde(rename = "Task_description")]
    pub description: Option<String>,
    /// Rendered note log.
    #[serde(rename = "Task_notes")]
    pub notes: String,
    /// Plan column; tasks are never planned through these actions.
    #[serde(rename = "Task_plan")]
    pub plan: Option<String>,
    /// Owning application.
    #[serde(rename = "Task_app_acronym")]
    pub app_acronym: String,
    /// Lifecycle state name.
    #[serde(rename = "Task_state")]
    pub state: String,
    /// Creating user.
    #[serde(rename = "Task_creator")]
    pub creator: String,
    /// Current owner.
    #[serde(rename = "Task_owner")]
    pub owner: String,
    /// Creation time, UTC, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "Task_createDate")]
    pub create_date: String,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            name: task.name().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            notes: task.notes().render(),
            plan: None,
            app_acronym: task.app_acronym().as_str().to_owned(),
            state: task.state().as_str().to_owned(),
            creator: task.creator().as_str().to_owned(),
            owner: task.owner().as_str().to_owned(),
            create_date: task.created_at().format(CREATE_DATE_FORMAT).to_string(),
        }
    }
}
