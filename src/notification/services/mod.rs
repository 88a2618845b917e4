//! Notification resolution and background delivery.

mod dispatcher;
mod trigger;

pub use dispatcher::{DispatchOutcome, NotificationDispatcher, NotificationError};
pub use trigger::{NotificationTrigger, NotificationWorker};
