//! In-memory application adapters.

mod application;

pub(crate) use application::ApplicationTable;
pub use application::InMemoryApplicationRepository;
