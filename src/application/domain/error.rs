//! Error types for application domain values.

use super::AppAcronym;
use thiserror::Error;

/// Errors returned while manipulating application values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationDomainError {
    /// The running number cannot be advanced any further.
    #[error("running number of application {0} is exhausted")]
    RunningNumberExhausted(AppAcronym),

    /// A persisted running number is negative.
    #[error("running number {0} must not be negative")]
    NegativeRunningNumber(i64),

    /// A running number does not fit the persisted `BIGINT` column.
    #[error("running number {0} exceeds the persisted maximum")]
    RunningNumberTooLarge(u64),
}
