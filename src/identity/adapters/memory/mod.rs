//! In-memory identity adapters.

mod user;

pub use user::InMemoryUserRepository;
