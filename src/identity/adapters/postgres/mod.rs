//! `PostgreSQL` adapters for user lookups.

mod models;
mod repository;
mod schema;

pub use repository::PostgresUserRepository;
