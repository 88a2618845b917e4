//! Port for comparing a plaintext password against a stored hash.

use crate::identity::domain::PasswordHash;

/// Password hash comparison primitive.
///
/// Implementations must compare digests in constant time and must treat a
/// malformed stored hash as a mismatch rather than an error, so callers cannot
/// distinguish the two.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    /// Returns `true` when `password` hashes to `hash`.
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool;
}
