//! Sink that keeps every message in memory.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::notification::{
    domain::Notification,
    ports::{NotificationSink, NotificationSinkError},
};

/// Records sent notifications for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationSink {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notifications sent so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationSinkError::Delivery`] when the lock is poisoned.
    pub fn sent(&self) -> Result<Vec<Notification>, NotificationSinkError> {
        let sent = self.sent.lock().map_err(|err| {
            NotificationSinkError::delivery(std::io::Error::other(err.to_string()))
        })?;
        Ok(sent.clone())
    }
}

#[async_trait]
impl NotificationSink for RecordingNotificationSink {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationSinkError> {
        let mut sent = self.sent.lock().map_err(|err| {
            NotificationSinkError::delivery(std::io::Error::other(err.to_string()))
        })?;
        sent.push(notification.clone());
        Ok(())
    }
}
