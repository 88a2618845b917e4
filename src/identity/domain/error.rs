//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The group name is empty.
    #[error("group name must not be empty")]
    EmptyGroupName,

    /// The email address is empty after trimming.
    #[error("email address must not be empty")]
    EmptyEmailAddress,
}
