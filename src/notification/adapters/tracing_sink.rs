//! Sink that writes each message to the log instead of a mail server.

use async_trait::async_trait;
use tracing::info;

use crate::identity::domain::EmailAddress;
use crate::notification::{
    domain::Notification,
    ports::{NotificationSink, NotificationSinkError},
};

/// Logs notifications at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl TracingNotificationSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationSinkError> {
        let recipients = notification
            .recipients()
            .iter()
            .map(EmailAddress::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        info!(
            from = notification.sender().map(EmailAddress::as_str),
            recipients = %recipients,
            subject = notification.subject(),
            body = notification.body(),
            "notification sent"
        );
        Ok(())
    }
}
