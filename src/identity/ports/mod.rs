//! Port contracts for identity lookups and password verification.
//!
//! Ports define infrastructure-agnostic interfaces used by identity services.

pub mod password;
pub mod repository;

pub use password::PasswordVerifier;
pub use repository::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use password::MockPasswordVerifier;
#[cfg(test)]
pub use repository::MockUserRepository;
