//! `PostgreSQL` repository implementation for user lookups.

use super::{models::UserRow, schema::users};
use crate::identity::{
    domain::{EmailAddress, GroupSet, PasswordHash, User, Username},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};
use crate::persistence::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &Username) -> UserRepositoryResult<Option<User>> {
        let lookup = username.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = users::table
                .filter(users::username.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            Ok(row.map(row_to_user))
        })
        .await
    }

    async fn list_all(&self) -> UserRepositoryResult<Vec<User>> {
        run_blocking(&self.pool, move |connection| {
            let rows = users::table
                .order(users::username.asc())
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_user).collect())
        })
        .await
    }
}

fn row_to_user(row: UserRow) -> User {
    let UserRow {
        username,
        password,
        email,
        is_disabled,
        group_list,
    } = row;

    // Blank addresses are treated as absent.
    let address = email.and_then(|raw| EmailAddress::new(raw).ok());
    User::new(
        Username::new(username),
        PasswordHash::new(password),
        GroupSet::parse(&group_list),
    )
    .with_email(address)
    .with_disabled(is_disabled)
}
