//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Rendered note log.
    pub notes: String,
    /// Owning application.
    pub app_acronym: String,
    /// Lifecycle state.
    pub state: String,
    /// Creating user.
    pub creator: String,
    /// Current owner.
    pub owner: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Rendered note log.
    pub notes: String,
    /// Owning application.
    pub app_acronym: String,
    /// Lifecycle state.
    pub state: String,
    /// Creating user.
    pub creator: String,
    /// Current owner.
    pub owner: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Columns rewritten by a state transition.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskTransitionChangeset {
    /// Rendered note log.
    pub notes: String,
    /// Lifecycle state.
    pub state: String,
    /// Current owner.
    pub owner: String,
}
