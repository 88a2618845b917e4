//! In-memory application repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::{AppAcronym, Application},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};

/// Shared application map; the in-memory task repository locks it when
/// claiming running numbers.
pub(crate) type ApplicationTable = Arc<RwLock<HashMap<AppAcronym, Application>>>;

/// Thread-safe in-memory application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    applications: ApplicationTable,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provisions or replaces an application record.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationRepositoryError::Persistence`] when the lock is
    /// poisoned.
    pub fn insert(&self, application: Application) -> ApplicationRepositoryResult<()> {
        let mut applications = self.applications.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        applications.insert(application.acronym().clone(), application);
        Ok(())
    }

    pub(crate) fn table(&self) -> ApplicationTable {
        Arc::clone(&self.applications)
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_by_acronym(
        &self,
        acronym: &AppAcronym,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let applications = self.applications.read().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(applications.get(acronym).cloned())
    }
}
