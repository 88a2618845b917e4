//! Adapter implementations for application ports.

pub mod memory;
pub mod postgres;
