//! Single-group permission attached to an application action.

use super::{GroupName, GroupSet};
use serde::{Deserialize, Serialize};

/// Group required to perform one action class on one application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "group", rename_all = "snake_case")]
pub enum Permission {
    /// No group is configured; the action is disabled for everyone.
    #[default]
    Unset,
    /// Members of the named group may perform the action.
    Group(GroupName),
}

impl Permission {
    /// Builds a permission from a nullable storage column.
    ///
    /// `NULL` and the empty string both mean [`Permission::Unset`].
    #[must_use]
    pub fn from_column(value: Option<&str>) -> Self {
        value
            .and_then(|raw| GroupName::new(raw).ok())
            .map_or(Self::Unset, Self::Group)
    }

    /// Returns the storage form of the permission.
    #[must_use]
    pub fn as_column(&self) -> Option<&str> {
        self.group().map(GroupName::as_str)
    }

    /// Returns the required group, if one is configured.
    #[must_use]
    pub const fn group(&self) -> Option<&GroupName> {
        match self {
            Self::Unset => None,
            Self::Group(group) => Some(group),
        }
    }

    /// Returns `true` when the given group set satisfies the permission.
    ///
    /// [`Permission::Unset`] never permits.
    #[must_use]
    pub fn permits(&self, groups: &GroupSet) -> bool {
        self.group().is_some_and(|group| groups.contains(group))
    }
}
