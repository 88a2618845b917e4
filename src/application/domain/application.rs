//! Application aggregate and its per-action permissions.

use super::{AppAcronym, ApplicationDomainError, RunningNumber};
use crate::identity::domain::Permission;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action class whose permission group is configured on an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionField {
    /// Creating tasks.
    Create,
    /// Moving tasks into and through `Doing`.
    Doing,
    /// Moving tasks to `Done`.
    Done,
}

impl PermissionField {
    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PermissionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One designated permission group per action class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPermissions {
    /// Group allowed to create tasks.
    pub create: Permission,
    /// Group allowed to work tasks in `Doing`.
    pub doing: Permission,
    /// Group allowed to promote tasks to `Done`.
    pub done: Permission,
}

impl ActionPermissions {
    /// Returns the permission for the given action class.
    #[must_use]
    pub const fn get(&self, field: PermissionField) -> &Permission {
        match field {
            PermissionField::Create => &self.create,
            PermissionField::Doing => &self.doing,
            PermissionField::Done => &self.done,
        }
    }
}

/// Application owning a family of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    acronym: AppAcronym,
    running_number: RunningNumber,
    permissions: ActionPermissions,
}

impl Application {
    /// Creates an application record.
    #[must_use]
    pub const fn new(
        acronym: AppAcronym,
        running_number: RunningNumber,
        permissions: ActionPermissions,
    ) -> Self {
        Self {
            acronym,
            running_number,
            permissions,
        }
    }

    /// Returns the acronym.
    #[must_use]
    pub const fn acronym(&self) -> &AppAcronym {
        &self.acronym
    }

    /// Returns the running number of the most recently created task.
    #[must_use]
    pub const fn running_number(&self) -> RunningNumber {
        self.running_number
    }

    /// Returns all configured permissions.
    #[must_use]
    pub const fn permissions(&self) -> &ActionPermissions {
        &self.permissions
    }

    /// Returns the permission for one action class.
    #[must_use]
    pub const fn permission(&self, field: PermissionField) -> &Permission {
        self.permissions.get(field)
    }

    /// Returns the running number the next task will be minted with.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::RunningNumberExhausted`] when the
    /// counter is at its maximum.
    pub fn next_running_number(&self) -> Result<RunningNumber, ApplicationDomainError> {
        self.running_number
            .successor()
            .ok_or_else(|| ApplicationDomainError::RunningNumberExhausted(self.acronym.clone()))
    }

    /// Records a newly claimed running number.
    pub const fn record_running_number(&mut self, running_number: RunningNumber) {
        self.running_number = running_number;
    }
}
