//! Permission group names and the delimited group list stored on users.

use super::IdentityDomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Name of a permission group.
///
/// Group names are compared exactly: no trimming and no case folding.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(String);

impl GroupName {
    /// Creates a group name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityDomainError::EmptyGroupName`] when the value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(IdentityDomainError::EmptyGroupName);
        }
        Ok(Self(raw))
    }

    /// Returns the group name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered set of groups a user belongs to.
///
/// Persisted as a comma-delimited string. Empty segments produced by
/// leading, trailing, or doubled delimiters are discarded so that an empty
/// marker can never satisfy a permission check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSet(BTreeSet<GroupName>);

impl GroupSet {
    /// Delimiter used by the persisted group list.
    pub const DELIMITER: char = ',';

    /// Parses a delimited group list.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        list.split(Self::DELIMITER)
            .filter_map(|segment| GroupName::new(segment).ok())
            .collect()
    }

    /// Returns `true` when the set contains exactly this group.
    #[must_use]
    pub fn contains(&self, group: &GroupName) -> bool {
        self.0.contains(group)
    }

    /// Returns `true` when the user belongs to no group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over group names in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupName> {
        self.0.iter()
    }

    /// Serializes the set back into its delimited storage form.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        self.0
            .iter()
            .map(GroupName::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<GroupName> for GroupSet {
    fn from_iter<I: IntoIterator<Item = GroupName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
