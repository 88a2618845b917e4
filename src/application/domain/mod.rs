//! Domain model for applications and their action permissions.

mod application;
mod error;
mod ids;

pub use application::{ActionPermissions, Application, PermissionField};
pub use error::ApplicationDomainError;
pub use ids::{AppAcronym, RunningNumber};
