//! Credential verification against stored password hashes.

use crate::identity::{
    domain::{Credentials, User},
    ports::{PasswordVerifier, UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while verifying credentials.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The user does not exist or the password did not match.
    ///
    /// Both causes collapse into this variant so callers cannot tell them
    /// apart.
    #[error("credentials did not match")]
    NoMatch,
    /// The user lookup failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// The hash comparison task did not complete.
    #[error("password verification task failed: {0}")]
    Verification(#[from] tokio::task::JoinError),
}

/// Verifies a username/password pair and returns the matching user.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordVerifier>,
}

impl CredentialVerifier {
    /// Creates a verifier over the given ports.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<dyn PasswordVerifier>) -> Self {
        Self { users, passwords }
    }

    /// Looks up the user and compares the password against its stored hash.
    ///
    /// The comparison runs on the blocking pool because hash derivation is
    /// CPU-bound. Performs no writes.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::NoMatch`] for an unknown user or a wrong
    /// password, [`CredentialError::Repository`] when the lookup fails, and
    /// [`CredentialError::Verification`] when the comparison task aborts.
    pub async fn verify(&self, credentials: &Credentials) -> Result<User, CredentialError> {
        let Some(user) = self.users.find_by_username(credentials.username()).await? else {
            return Err(CredentialError::NoMatch);
        };

        let passwords = Arc::clone(&self.passwords);
        let hash = user.password_hash().clone();
        let candidate = credentials.clone();
        let matched =
            tokio::task::spawn_blocking(move || passwords.verify(candidate.password(), &hash))
                .await?;

        if matched {
            Ok(user)
        } else {
            Err(CredentialError::NoMatch)
        }
    }
}
