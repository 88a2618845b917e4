//! Step definitions for task promotion scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
