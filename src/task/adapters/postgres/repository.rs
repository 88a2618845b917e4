//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow, TaskTransitionChangeset},
    schema::tasks,
};
use crate::application::{adapters::postgres::schema::applications, domain::AppAcronym};
use crate::identity::domain::Username;
use crate::persistence::{PgPool, run_blocking};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskName, TaskNotes, TaskState},
    ports::{RunningNumberClaim, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<DieselError> for TaskRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create_with_running_number(
        &self,
        task: &Task,
        claim: RunningNumberClaim,
    ) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let acronym = task.app_acronym().clone();
        let new_row = to_new_row(task);
        let previous = claim
            .previous
            .to_persisted()
            .map_err(TaskRepositoryError::persistence)?;
        let next = claim
            .next
            .to_persisted()
            .map_err(TaskRepositoryError::persistence)?;

        run_blocking(&self.pool, move |connection| {
            connection.transaction::<_, TaskRepositoryError, _>(|tx| {
                let inserted = diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            TaskRepositoryError::DuplicateTask(task_id.clone())
                        }
                        _ => TaskRepositoryError::persistence(err),
                    })?;
                if inserted == 0 {
                    return Err(TaskRepositoryError::NotInserted(task_id));
                }

                let advanced = diesel::update(
                    applications::table
                        .filter(applications::acronym.eq(acronym.as_str()))
                        .filter(applications::running_number.eq(previous)),
                )
                .set(applications::running_number.eq(next))
                .execute(tx)?;
                if advanced == 0 {
                    return Err(TaskRepositoryError::RunningNumberConflict {
                        acronym,
                        expected: claim.previous,
                    });
                }
                Ok(())
            })
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id().clone();
        let changes = TaskTransitionChangeset {
            notes: task.notes().render(),
            state: task.state().as_str().to_owned(),
            owner: task.owner().as_str().to_owned(),
        };

        run_blocking(&self.pool, move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.as_str())))
                .set(&changes)
                .execute(connection)?;
            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: &TaskId) -> TaskRepositoryResult<Option<Task>> {
        let lookup = id.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(lookup))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn find_by_app_and_state(
        &self,
        acronym: &AppAcronym,
        state: TaskState,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let lookup = acronym.as_str().to_owned();
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::app_acronym.eq(lookup))
                .filter(tasks::state.eq(state.as_str()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().as_str().to_owned(),
        name: task.name().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        notes: task.notes().render(),
        app_acronym: task.app_acronym().as_str().to_owned(),
        state: task.state().as_str().to_owned(),
        creator: task.creator().as_str().to_owned(),
        owner: task.owner().as_str().to_owned(),
        created_at: task.created_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        notes,
        app_acronym,
        state,
        creator,
        owner,
        created_at,
    } = row;

    let task_name = TaskName::new(name).map_err(TaskRepositoryError::persistence)?;
    let task_state =
        TaskState::try_from(state.as_str()).map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        name: task_name,
        description: description.filter(|text| !text.is_empty()),
        notes: TaskNotes::from_persisted(Some(notes)),
        app_acronym: AppAcronym::new(app_acronym),
        state: task_state,
        creator: Username::new(creator),
        owner: Username::new(owner),
        created_at,
    };
    Ok(Task::from_persisted(data))
}
