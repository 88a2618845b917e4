//! Then steps for task promotion BDD scenarios.

use rstest_bdd_macros::then;
use tasktrack::api::ActionStatus;
use tasktrack::task::{
    domain::{Task, TaskId, TaskState},
    ports::TaskRepository,
};

use super::world::{PromotionWorld, run_async};

fn stored_task(world: &PromotionWorld, id: &str) -> Result<Task, eyre::Report> {
    run_async(world.tasks.find_by_id(&TaskId::new(id)))?
        .ok_or_else(|| eyre::eyre!("task {id} is not stored"))
}

fn last_status(world: &PromotionWorld) -> Result<ActionStatus, eyre::Report> {
    world
        .last_response
        .as_ref()
        .map(tasktrack::api::ActionResponse::status)
        .ok_or_else(|| eyre::eyre!("no action has run"))
}

#[then("the action succeeds")]
fn action_succeeds(world: &PromotionWorld) -> Result<(), eyre::Report> {
    let status = last_status(world)?;
    eyre::ensure!(status == ActionStatus::Success, "expected S001, got {status}");
    Ok(())
}

#[then(r#"the action fails with code "{code}""#)]
fn action_fails_with(world: &PromotionWorld, code: String) -> Result<(), eyre::Report> {
    let status = last_status(world)?;
    eyre::ensure!(status.code() == code, "expected {code}, got {}", status.code());
    Ok(())
}

#[then(r#"task "{id}" is in state "{state}""#)]
fn task_is_in_state(world: &PromotionWorld, id: String, state: String) -> Result<(), eyre::Report> {
    let expected = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let task = stored_task(world, &id)?;
    eyre::ensure!(
        task.state() == expected,
        "expected state {expected}, found {}",
        task.state()
    );
    Ok(())
}

#[then(r#"task "{id}" is owned by "{owner}""#)]
fn task_is_owned_by(world: &PromotionWorld, id: String, owner: String) -> Result<(), eyre::Report> {
    let task = stored_task(world, &id)?;
    eyre::ensure!(
        task.owner().as_str() == owner,
        "expected owner {owner}, found {}",
        task.owner()
    );
    Ok(())
}

#[then(r#"the newest note of task "{id}" ends with "{text}""#)]
fn newest_note_ends_with(
    world: &PromotionWorld,
    id: String,
    text: String,
) -> Result<(), eyre::Report> {
    let task = stored_task(world, &id)?;
    let newest = task
        .notes()
        .entries()
        .first()
        .ok_or_else(|| eyre::eyre!("task {id} has no notes"))?;
    eyre::ensure!(
        newest.as_str().ends_with(&text),
        "unexpected newest note {}",
        newest.as_str()
    );
    Ok(())
}

#[then(r#""{email}" is notified that "{name}" was promoted"#)]
fn recipient_is_notified(
    world: &PromotionWorld,
    email: String,
    name: String,
) -> Result<(), eyre::Report> {
    let sent = world.sink.sent()?;
    let message = sent
        .first()
        .ok_or_else(|| eyre::eyre!("no notification was sent"))?;
    eyre::ensure!(
        message.recipients().iter().any(|address| address.as_str() == email),
        "{email} is not a recipient"
    );
    eyre::ensure!(
        message.body().contains(&format!("\"{name}\"")),
        "unexpected body {}",
        message.body()
    );
    Ok(())
}

#[then("nobody is notified")]
fn nobody_is_notified(world: &PromotionWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.sink.sent()?.is_empty(), "unexpected notification");
    Ok(())
}
