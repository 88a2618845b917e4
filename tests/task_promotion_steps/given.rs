//! Given steps for task promotion BDD scenarios.

use rstest_bdd_macros::given;
use tasktrack::application::domain::{ActionPermissions, AppAcronym, Application, RunningNumber};
use tasktrack::identity::{
    adapters::password::bcrypt_hash,
    domain::{EmailAddress, GroupSet, Permission, User, Username},
};
use tasktrack::task::domain::{PersistedTaskData, Task, TaskId, TaskName, TaskNotes, TaskState};

use super::world::{PASSWORD, PromotionWorld};

#[given(r#"an application "{acronym}" whose Done group is "{group}""#)]
fn application_with_done_group(
    world: &mut PromotionWorld,
    acronym: String,
    group: String,
) -> Result<(), eyre::Report> {
    world.applications.insert(Application::new(
        AppAcronym::new(acronym),
        RunningNumber::new(0),
        ActionPermissions {
            create: Permission::from_column(Some("pm")),
            doing: Permission::from_column(Some("dev")),
            done: Permission::from_column(Some(group.as_str())),
        },
    ))?;
    Ok(())
}

#[given(r#"a user "{name}" in groups "{groups}" with email "{email}""#)]
fn user_with_groups(
    world: &mut PromotionWorld,
    name: String,
    groups: String,
    email: String,
) -> Result<(), eyre::Report> {
    let user = User::new(
        Username::new(name),
        bcrypt_hash(PASSWORD, 4)?,
        GroupSet::parse(&groups),
    )
    .with_email(EmailAddress::new(email)?);
    world.users.insert(user)?;
    Ok(())
}

#[given(r#"task "{id}" named "{name}" is in state "{state}""#)]
fn task_in_state(
    world: &mut PromotionWorld,
    id: String,
    name: String,
    state: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid state in scenario: {err}"))?;
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        name: TaskName::new(name)?,
        description: None,
        notes: TaskNotes::default(),
        app_acronym: AppAcronym::new("APP1"),
        state: parsed,
        creator: Username::new("paula"),
        owner: Username::new("paula"),
        created_at: chrono::Utc::now(),
    });
    world.tasks.insert(task)?;
    Ok(())
}
