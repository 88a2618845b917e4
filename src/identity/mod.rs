//! User identity, credential verification, and group authorization.
//!
//! Users are provisioned outside this crate; the identity context only reads
//! them. Every action re-verifies credentials against the stored password
//! hash and authorizes against a single designated permission group. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Verification and authorization services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
