//! Fire-and-forget hand-off of promotion notices to a background worker.

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{DispatchOutcome, NotificationDispatcher};
use crate::notification::domain::PromotionNotice;

/// Sending half of the notification queue.
///
/// [`NotificationTrigger::notify`] never waits and never fails; a full or
/// closed queue is logged and the notice dropped.
#[derive(Debug, Clone)]
pub struct NotificationTrigger {
    sender: Option<mpsc::Sender<PromotionNotice>>,
}

/// Background task draining the notification queue.
///
/// The worker stops once every [`NotificationTrigger`] clone is dropped.
#[derive(Debug)]
pub struct NotificationWorker {
    handle: JoinHandle<()>,
}

impl NotificationTrigger {
    /// Starts a worker on the current tokio runtime and returns its trigger.
    #[must_use]
    pub fn spawn(
        dispatcher: NotificationDispatcher,
        capacity: usize,
    ) -> (Self, NotificationWorker) {
        let (sender, mut receiver) = mpsc::channel::<PromotionNotice>(capacity.max(1));
        let handle = tokio::spawn(async move {
            while let Some(notice) = receiver.recv().await {
                deliver(&dispatcher, &notice).await;
            }
            debug!("notification queue closed");
        });
        (
            Self {
                sender: Some(sender),
            },
            NotificationWorker { handle },
        )
    }

    /// Returns a trigger that drops every notice.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { sender: None }
    }

    /// Queues a notice without waiting.
    pub fn notify(&self, notice: PromotionNotice) {
        let Some(sender) = &self.sender else {
            debug!(task_name = %notice.task_name(), "notifications disabled");
            return;
        };
        match sender.try_send(notice) {
            Ok(()) => {}
            Err(TrySendError::Full(dropped)) => warn!(
                task_name = %dropped.task_name(),
                app_acronym = %dropped.app_acronym(),
                "notification queue full, dropping notice"
            ),
            Err(TrySendError::Closed(dropped)) => warn!(
                task_name = %dropped.task_name(),
                app_acronym = %dropped.app_acronym(),
                "notification worker stopped, dropping notice"
            ),
        }
    }
}

impl NotificationWorker {
    /// Waits for the worker to drain the queue and stop.
    pub async fn join(self) {
        if let Err(err) = self.handle.await {
            warn!(error = %err, "notification worker terminated abnormally");
        }
    }
}

async fn deliver(dispatcher: &NotificationDispatcher, notice: &PromotionNotice) {
    match dispatcher.dispatch(notice).await {
        Ok(DispatchOutcome::Sent { recipients }) => info!(
            task_name = %notice.task_name(),
            app_acronym = %notice.app_acronym(),
            recipients,
            "promotion notification sent"
        ),
        Ok(DispatchOutcome::NoDoneGroup) => debug!(
            app_acronym = %notice.app_acronym(),
            "no Done group configured, notification skipped"
        ),
        Ok(DispatchOutcome::NoRecipients) => debug!(
            app_acronym = %notice.app_acronym(),
            "Done group has no addressable members, notification skipped"
        ),
        Err(err) => warn!(
            task_name = %notice.task_name(),
            app_acronym = %notice.app_acronym(),
            error = %err,
            "promotion notification failed"
        ),
    }
}
