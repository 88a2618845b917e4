//! Tasktrack: permission-gated task tracking core.
//!
//! This crate authenticates a user on every action, authorizes the action
//! against the permission group configured on the owning application, and
//! moves task records through a fixed five-state lifecycle while keeping an
//! append-only audit trail in the task notes.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, sinks, etc.)
//!
//! # Modules
//!
//! - [`identity`]: Users, credential verification, and group authorization
//! - [`application`]: Applications, running numbers, and action permissions
//! - [`task`]: Task state machine and the task command handlers
//! - [`notification`]: Best-effort promotion notifications
//! - [`api`]: Transport-agnostic action dispatch and wire statuses

pub mod api;
pub mod application;
pub mod config;
pub mod identity;
pub mod notification;
pub mod persistence;
pub mod task;
pub mod telemetry;
