//! Port contracts for application lookups.

pub mod repository;

pub use repository::{
    ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult,
};

#[cfg(test)]
pub use repository::MockApplicationRepository;
