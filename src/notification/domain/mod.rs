//! Notification messages and their templates.

mod message;

pub use message::{Notification, NotificationTemplateError, PromotionNotice};
