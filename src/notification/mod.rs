//! Best-effort notifications sent when tasks are promoted.
//!
//! A [`services::NotificationTrigger`] hands promotion notices to a bounded
//! queue. A background worker resolves the recipients and passes the
//! rendered message to a [`ports::NotificationSink`]. Failures are logged
//! and never reach the action that raised the notice.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
