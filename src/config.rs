//! Runtime settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Settings controlling store access and notification dispatch.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASK_TRACKER")]
pub struct TrackerSettings {
    /// `PostgreSQL` connection URL.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    #[ortho_config(default = 8)]
    pub pool_max_size: u32,
    /// Bound on pending notifications awaiting delivery.
    #[ortho_config(default = 64)]
    pub notification_queue_capacity: usize,
    /// Sender address recorded on outbound notifications.
    pub notification_from: Option<String>,
}

impl TrackerSettings {
    /// Return the configured database URL, if any.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the configured pool size.
    #[must_use]
    pub const fn pool_max_size(&self) -> u32 {
        self.pool_max_size
    }

    /// Return the configured queue bound.
    ///
    /// A zero bound is raised to one because the queue must hold at least a
    /// single pending notice.
    #[must_use]
    pub fn notification_queue_capacity(&self) -> usize {
        self.notification_queue_capacity.max(1)
    }

    /// Return the configured sender address, if any.
    #[must_use]
    pub fn notification_from(&self) -> Option<&str> {
        self.notification_from.as_deref()
    }
}
