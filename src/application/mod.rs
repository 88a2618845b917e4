//! Applications own tasks, mint task identifiers, and carry permissions.
//!
//! Each application designates one permission group per action class and
//! keeps the running number used to build task identifiers. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
