//! `PostgreSQL` adapters for application lookups.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::PostgresApplicationRepository;
