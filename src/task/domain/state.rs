//! Task states and the transitions between them.

use super::ParseTaskStateError;
use crate::application::domain::PermissionField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    /// Task has been created.
    Open,
    /// Task is planned.
    ToDo,
    /// Task is being worked on.
    Doing,
    /// Task work is complete.
    Done,
    /// Task is closed.
    Close,
}

impl TaskState {
    /// Every state, in lifecycle order.
    pub const ALL: [Self; 5] = [Self::Open, Self::ToDo, Self::Doing, Self::Done, Self::Close];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::ToDo => "ToDo",
            Self::Doing => "Doing",
            Self::Done => "Done",
            Self::Close => "Close",
        }
    }
}

impl TryFrom<&str> for TaskState {
    type Error = ParseTaskStateError;

    /// Parses a state name. Matching is exact and case-sensitive.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| ParseTaskStateError(value.to_owned()))
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A permitted state change and the application permission gating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    from: TaskState,
    to: TaskState,
    permission: PermissionField,
}

impl Transition {
    /// Promotion of finished work, gated by the Done group.
    pub const DOING_TO_DONE: Self = Self::new(
        TaskState::Doing,
        TaskState::Done,
        PermissionField::Done,
    );

    /// Declares a transition.
    #[must_use]
    pub const fn new(from: TaskState, to: TaskState, permission: PermissionField) -> Self {
        Self {
            from,
            to,
            permission,
        }
    }

    /// Returns the required starting state.
    #[must_use]
    pub const fn source(self) -> TaskState {
        self.from
    }

    /// Returns the resulting state.
    #[must_use]
    pub const fn target(self) -> TaskState {
        self.to
    }

    /// Returns the application permission gating the transition.
    #[must_use]
    pub const fn permission(self) -> PermissionField {
        self.permission
    }

    /// Returns `true` when a task in `current` may take this transition.
    #[must_use]
    pub fn starts_from(self, current: TaskState) -> bool {
        self.from == current
    }
}
