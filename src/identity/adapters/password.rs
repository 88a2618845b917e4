//! Password hash verification.
//!
//! Stored hashes come in two schemes:
//!
//! - bcrypt modular-crypt strings (`$2a$`, `$2b$`, `$2x$`, `$2y$`), which is
//!   what provisioned accounts carry;
//! - `pbkdf2-sha256$<rounds>$<salt-hex>$<digest-hex>`.
//!
//! [`StoredHashVerifier`] picks the scheme from the hash prefix.

use crate::identity::{domain::PasswordHash, ports::PasswordVerifier};
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use thiserror::Error;

const PBKDF2_SCHEME: &str = "pbkdf2-sha256";
const BCRYPT_PREFIXES: [&str; 4] = ["$2a$", "$2b$", "$2x$", "$2y$"];
const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;
const MAX_DIGEST_LEN: usize = 64;

/// bcrypt cost used for newly provisioned hashes.
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Error raised when a new hash cannot be produced.
#[derive(Debug, Error)]
#[error("bcrypt hashing failed: {0}")]
pub struct PasswordHashError(#[from] bcrypt::BcryptError);

/// Verifies passwords against bcrypt hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordVerifier;

impl BcryptPasswordVerifier {
    /// Creates a verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        bcrypt::verify(password, hash.as_str()).unwrap_or(false)
    }
}

/// Hashes a password with bcrypt at the given cost.
///
/// # Errors
///
/// Returns [`PasswordHashError`] when the cost is outside bcrypt's range.
pub fn bcrypt_hash(password: &str, cost: u32) -> Result<PasswordHash, PasswordHashError> {
    Ok(PasswordHash::new(bcrypt::hash(password, cost)?))
}

/// Verifies passwords against PBKDF2-HMAC-SHA256 hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2PasswordVerifier;

impl Pbkdf2PasswordVerifier {
    /// Creates a verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for Pbkdf2PasswordVerifier {
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let Some(encoded) = EncodedPbkdf2::parse(hash.as_str()) else {
            return false;
        };
        let mut derived = vec![0_u8; encoded.digest.len()];
        pbkdf2::pbkdf2_hmac::<Sha256>(
            password.as_bytes(),
            &encoded.salt,
            encoded.rounds,
            &mut derived,
        );
        derived.ct_eq(&encoded.digest).into()
    }
}

/// Hashes a password with PBKDF2 and a fresh random salt.
#[must_use]
pub fn pbkdf2_hash(password: &str, rounds: u32) -> PasswordHash {
    let mut salt = [0_u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    pbkdf2_hash_with_salt(password, &salt, rounds)
}

/// Hashes a password with PBKDF2 and a caller-supplied salt.
#[must_use]
pub fn pbkdf2_hash_with_salt(password: &str, salt: &[u8], rounds: u32) -> PasswordHash {
    let mut digest = [0_u8; DIGEST_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, rounds, &mut digest);
    PasswordHash::new(format!(
        "{PBKDF2_SCHEME}${rounds}${}${}",
        hex::encode(salt),
        hex::encode(digest)
    ))
}

/// Verifies against whichever supported scheme the stored hash uses.
///
/// Hashes in an unrecognised scheme never verify.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredHashVerifier;

impl StoredHashVerifier {
    /// Creates a verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordVerifier for StoredHashVerifier {
    fn verify(&self, password: &str, hash: &PasswordHash) -> bool {
        let encoded = hash.as_str();
        if BCRYPT_PREFIXES
            .iter()
            .any(|prefix| encoded.starts_with(prefix))
        {
            BcryptPasswordVerifier.verify(password, hash)
        } else if encoded.starts_with(PBKDF2_SCHEME) {
            Pbkdf2PasswordVerifier.verify(password, hash)
        } else {
            false
        }
    }
}

struct EncodedPbkdf2 {
    rounds: u32,
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl EncodedPbkdf2 {
    fn parse(encoded: &str) -> Option<Self> {
        let mut parts = encoded.split('$');
        let scheme = parts.next()?;
        let rounds = parts.next()?.parse::<u32>().ok()?;
        let salt = hex::decode(parts.next()?).ok()?;
        let digest = hex::decode(parts.next()?).ok()?;
        if scheme != PBKDF2_SCHEME || parts.next().is_some() || rounds == 0 {
            return None;
        }
        if digest.is_empty() || digest.len() > MAX_DIGEST_LEN {
            return None;
        }
        Some(Self {
            rounds,
            salt,
            digest,
        })
    }
}
