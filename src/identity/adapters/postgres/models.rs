//! Diesel row models for user records.

use super::schema::users;
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Unique account name.
    pub username: String,
    /// Encoded password hash.
    pub password: String,
    /// Optional notification address.
    pub email: Option<String>,
    /// Disabled flag.
    pub is_disabled: bool,
    /// Comma-delimited group list.
    pub group_list: String,
}
