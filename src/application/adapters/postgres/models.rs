//! Diesel row models for application records.

use super::schema::applications;
use diesel::prelude::*;

/// Query result row for application records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Unique application acronym.
    pub acronym: String,
    /// Running number of the most recently created task.
    pub running_number: i64,
    /// Group permitted to create tasks.
    pub permit_create: Option<String>,
    /// Group permitted to work tasks in `Doing`.
    pub permit_doing: Option<String>,
    /// Group permitted to promote tasks to `Done`.
    pub permit_done: Option<String>,
}
