//! Credential verification and group authorization services.

mod authorization;
mod credentials;

pub use authorization::authorize;
pub use credentials::{CredentialError, CredentialVerifier};
