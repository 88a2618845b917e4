//! Identifier and counter types for applications.

use super::ApplicationDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique short name of an application, used as the task identifier prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppAcronym(String);

impl AppAcronym {
    /// Creates an acronym from raw input.
    ///
    /// Acronyms are matched exactly against stored records.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the acronym as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AppAcronym {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AppAcronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Application-scoped counter used to mint task identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunningNumber(u64);

impl RunningNumber {
    /// Largest running number representable in the `PostgreSQL` schema.
    const MAX_PERSISTED_VALUE: u64 = i64::MAX as u64;

    /// Creates a running number.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Creates a running number from its persisted `BIGINT` form.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::NegativeRunningNumber`] for negative
    /// values.
    pub fn from_persisted(value: i64) -> Result<Self, ApplicationDomainError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ApplicationDomainError::NegativeRunningNumber(value))
    }

    /// Returns the persisted `BIGINT` form.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::RunningNumberTooLarge`] when the
    /// value exceeds `i64::MAX`.
    pub fn to_persisted(self) -> Result<i64, ApplicationDomainError> {
        i64::try_from(self.0).map_err(|_| ApplicationDomainError::RunningNumberTooLarge(self.0))
    }

    /// Returns the successor, or `None` past the persisted maximum.
    #[must_use]
    pub const fn successor(self) -> Option<Self> {
        if self.0 >= Self::MAX_PERSISTED_VALUE {
            return None;
        }
        Some(Self(self.0 + 1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RunningNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
