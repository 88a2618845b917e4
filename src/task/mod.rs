//! Task records and the commands that create, list and promote them.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and the state machine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command handlers in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
