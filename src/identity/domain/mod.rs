//! Domain model for users, groups, and permissions.

mod credentials;
mod error;
mod groups;
mod permission;
mod user;

pub use credentials::Credentials;
pub use error::IdentityDomainError;
pub use groups::{GroupName, GroupSet};
pub use permission::Permission;
pub use user::{EmailAddress, PasswordHash, User, Username};
