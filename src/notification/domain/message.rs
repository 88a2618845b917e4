//! Promotion notices and rendered notification messages.

use crate::application::domain::AppAcronym;
use crate::identity::domain::EmailAddress;
use crate::task::domain::TaskName;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PROMOTION_SUBJECT: &str = "Task Promotion Notification";
const PROMOTION_BODY: &str = r#"The task "{{ task_name }}" has been promoted to "Done"."#;

/// Request to notify the Done group that a task was promoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionNotice {
    task_name: TaskName,
    app_acronym: AppAcronym,
}

impl PromotionNotice {
    /// Creates a notice for the given task.
    #[must_use]
    pub const fn new(task_name: TaskName, app_acronym: AppAcronym) -> Self {
        Self {
            task_name,
            app_acronym,
        }
    }

    /// Returns the promoted task's name.
    #[must_use]
    pub const fn task_name(&self) -> &TaskName {
        &self.task_name
    }

    /// Returns the application whose Done group is notified.
    #[must_use]
    pub const fn app_acronym(&self) -> &AppAcronym {
        &self.app_acronym
    }
}

/// Error raised while rendering a notification template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render notification template: {0}")]
pub struct NotificationTemplateError(pub String);

/// Message handed to a notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    from: Option<EmailAddress>,
    recipients: Vec<EmailAddress>,
    subject: String,
    body: String,
}

impl Notification {
    /// Renders the promotion message for one recipient list.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationTemplateError`] when the template fails to
    /// render.
    pub fn promotion(
        notice: &PromotionNotice,
        from: Option<EmailAddress>,
        recipients: Vec<EmailAddress>,
    ) -> Result<Self, NotificationTemplateError> {
        let environment = Environment::new();
        let body = environment
            .render_str(
                PROMOTION_BODY,
                context! { task_name => notice.task_name().as_str() },
            )
            .map_err(|err| NotificationTemplateError(err.to_string()))?;
        Ok(Self {
            from,
            recipients,
            subject: PROMOTION_SUBJECT.to_owned(),
            body,
        })
    }

    /// Returns the sender address, if configured.
    #[must_use]
    pub const fn sender(&self) -> Option<&EmailAddress> {
        self.from.as_ref()
    }

    /// Returns every recipient of the single dispatch.
    #[must_use]
    pub fn recipients(&self) -> &[EmailAddress] {
        &self.recipients
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
