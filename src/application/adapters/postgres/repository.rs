//! `PostgreSQL` repository implementation for application lookups.

use super::{models::ApplicationRow, schema::applications};
use crate::application::{
    domain::{ActionPermissions, AppAcronym, Application, RunningNumber},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};
use crate::identity::domain::Permission;
use crate::persistence::{PgPool, run_blocking};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed application repository.
#[derive(Debug, Clone)]
pub struct PostgresApplicationRepository {
    pool: PgPool,
}

impl PostgresApplicationRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PostgresApplicationRepository {
    async fn find_by_acronym(
        &self,
        acronym: &AppAcronym,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let lookup = acronym.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = applications::table
                .filter(applications::acronym.eq(lookup))
                .select(ApplicationRow::as_select())
                .first::<ApplicationRow>(connection)
                .optional()
                .map_err(ApplicationRepositoryError::persistence)?;
            row.map(row_to_application).transpose()
        })
        .await
    }
}

fn row_to_application(row: ApplicationRow) -> ApplicationRepositoryResult<Application> {
    let ApplicationRow {
        acronym,
        running_number,
        permit_create,
        permit_doing,
        permit_done,
    } = row;

    let counter = RunningNumber::from_persisted(running_number)
        .map_err(ApplicationRepositoryError::persistence)?;
    let permissions = ActionPermissions {
        create: Permission::from_column(permit_create.as_deref()),
        doing: Permission::from_column(permit_doing.as_deref()),
        done: Permission::from_column(permit_done.as_deref()),
    };
    Ok(Application::new(
        AppAcronym::new(acronym),
        counter,
        permissions,
    ))
}
