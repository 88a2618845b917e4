//! In-memory user repository for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{User, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions or replaces a user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, user: User) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.insert(user.username().clone(), user);
        Ok(())
    }
}

fn poisoned<T>(err: std::sync::PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|left, right| left.username().cmp(right.username()));
        Ok(all)
    }
}
