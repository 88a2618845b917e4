//! Resolves the recipients of a promotion notice and sends one message.

use std::sync::Arc;

use thiserror::Error;

use crate::application::{
    domain::{AppAcronym, PermissionField},
    ports::{ApplicationRepository, ApplicationRepositoryError},
};
use crate::identity::{
    domain::{EmailAddress, GroupName},
    ports::{UserRepository, UserRepositoryError},
};
use crate::notification::{
    domain::{Notification, NotificationTemplateError, PromotionNotice},
    ports::{NotificationSink, NotificationSinkError},
};

/// Result of handling one notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// One message went to the given number of recipients.
    Sent {
        /// Recipient count.
        recipients: usize,
    },
    /// The application has no Done group configured.
    NoDoneGroup,
    /// No member of the Done group has an email address.
    NoRecipients,
}

/// Failures while handling a notice. Callers log these and move on.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The application vanished between promotion and notification.
    #[error("application not found: {0}")]
    ApplicationNotFound(AppAcronym),
    /// Application lookup failed.
    #[error(transparent)]
    Applications(#[from] ApplicationRepositoryError),
    /// User enumeration failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// The message could not be rendered.
    #[error(transparent)]
    Template(#[from] NotificationTemplateError),
    /// The sink rejected the message.
    #[error(transparent)]
    Sink(#[from] NotificationSinkError),
}

/// Turns promotion notices into sink deliveries.
#[derive(Clone)]
pub struct NotificationDispatcher {
    users: Arc<dyn UserRepository>,
    applications: Arc<dyn ApplicationRepository>,
    sink: Arc<dyn NotificationSink>,
    sender: Option<EmailAddress>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        applications: Arc<dyn ApplicationRepository>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            users,
            applications,
            sink,
            sender: None,
        }
    }

    /// Sets the sender address recorded on every message.
    #[must_use]
    pub fn with_sender(mut self, sender: Option<EmailAddress>) -> Self {
        self.sender = sender;
        self
    }

    /// Resolves recipients and sends one message to all of them.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError`] when a lookup, the template or the sink
    /// fails.
    pub async fn dispatch(
        &self,
        notice: &PromotionNotice,
    ) -> Result<DispatchOutcome, NotificationError> {
        let application = self
            .applications
            .find_by_acronym(notice.app_acronym())
            .await?
            .ok_or_else(|| NotificationError::ApplicationNotFound(notice.app_acronym().clone()))?;
        let Some(group) = application.permission(PermissionField::Done).group() else {
            return Ok(DispatchOutcome::NoDoneGroup);
        };

        let recipients = self.resolve_recipients(group).await?;
        if recipients.is_empty() {
            return Ok(DispatchOutcome::NoRecipients);
        }

        let count = recipients.len();
        let notification = Notification::promotion(notice, self.sender.clone(), recipients)?;
        self.sink.send(&notification).await?;
        Ok(DispatchOutcome::Sent { recipients: count })
    }

    /// Returns the addresses of every group member that has one.
    async fn resolve_recipients(
        &self,
        group: &GroupName,
    ) -> Result<Vec<EmailAddress>, NotificationError> {
        let users = self.users.list_all().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.groups().contains(group))
            .filter_map(|user| user.email().cloned())
            .collect())
    }
}
