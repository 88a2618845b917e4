//! Repository port for application lookups.
//!
//! The running number is only ever advanced together with a task insert, so
//! the write lives on [`crate::task::ports::TaskRepository`].

use crate::application::domain::{AppAcronym, Application};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Application lookup contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Finds an application by acronym.
    ///
    /// Returns `None` when the application does not exist.
    async fn find_by_acronym(
        &self,
        acronym: &AppAcronym,
    ) -> ApplicationRepositoryResult<Option<Application>>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<crate::persistence::BlockingError> for ApplicationRepositoryError {
    fn from(err: crate::persistence::BlockingError) -> Self {
        Self::persistence(err)
    }
}
