//! Wire status vocabulary.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::task::services::TaskCommandError;

/// Outcome of an action as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionStatus {
    /// The action completed.
    Success,
    /// A mandatory field is absent.
    MissingParameters,
    /// A field has the wrong JSON type.
    InvalidFieldType,
    /// Unknown user or wrong password.
    InvalidCredentials,
    /// The account is disabled.
    AccountDisabled,
    /// The application does not exist.
    ApplicationNotFound,
    /// The user lacks the required group.
    NotAuthorized,
    /// The state name is not one of the five states.
    InvalidState,
    /// The task does not exist.
    TaskNotFound,
    /// The task is not in the transition's starting state.
    InvalidStateTransition,
    /// The task could not be created.
    CreateFailed,
    /// The task could not be updated.
    UpdateFailed,
    /// A store read failed.
    QueryFailed,
    /// No action is registered at the path.
    UnknownAction,
    /// The action path contains special characters.
    InvalidActionPath,
}

impl ActionStatus {
    /// Returns the wire code. Several statuses share a code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Success => "S001",
            Self::MissingParameters => "PS001",
            Self::InvalidFieldType => "PS002",
            Self::InvalidCredentials => "IM001",
            Self::AccountDisabled => "IM002",
            Self::ApplicationNotFound => "AM001",
            Self::NotAuthorized => "AM002",
            Self::TaskNotFound => "T001",
            Self::InvalidState | Self::InvalidStateTransition => "T002",
            Self::CreateFailed | Self::UpdateFailed | Self::QueryFailed => "T003",
            Self::UnknownAction => "AS001",
            Self::InvalidActionPath => "AS002",
        }
    }

    /// Returns the status name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::MissingParameters => "MissingParameters",
            Self::InvalidFieldType => "InvalidFieldType",
            Self::InvalidCredentials => "InvalidCredentials",
            Self::AccountDisabled => "AccountDisabled",
            Self::ApplicationNotFound => "ApplicationNotFound",
            Self::NotAuthorized => "NotAuthorized",
            Self::InvalidState => "InvalidState",
            Self::TaskNotFound => "TaskNotFound",
            Self::InvalidStateTransition => "InvalidStateTransition",
            Self::CreateFailed => "CreateFailed",
            Self::UpdateFailed => "UpdateFailed",
            Self::QueryFailed => "QueryFailed",
            Self::UnknownAction => "UnknownAction",
            Self::InvalidActionPath => "InvalidActionPath",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ActionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl From<&TaskCommandError> for ActionStatus {
    fn from(err: &TaskCommandError) -> Self {
        match err {
            TaskCommandError::InvalidCredentials => Self::InvalidCredentials,
            TaskCommandError::AccountDisabled => Self::AccountDisabled,
            TaskCommandError::ApplicationNotFound(_) => Self::ApplicationNotFound,
            TaskCommandError::NotAuthorized => Self::NotAuthorized,
            TaskCommandError::InvalidState(_) => Self::InvalidState,
            TaskCommandError::TaskNotFound(_) => Self::TaskNotFound,
            TaskCommandError::InvalidStateTransition(_) => Self::InvalidStateTransition,
            TaskCommandError::CreateFailed(_) => Self::CreateFailed,
            TaskCommandError::UpdateFailed(_) => Self::UpdateFailed,
            TaskCommandError::QueryFailed(_) => Self::QueryFailed,
        }
    }
}

impl From<TaskCommandError> for ActionStatus {
    fn from(err: TaskCommandError) -> Self {
        Self::from(&err)
    }
}
