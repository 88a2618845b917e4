//! In-memory integration tests for the task command pipelines.

use super::helpers::{Tracker, login, tracker};
use tasktrack::application::domain::AppAcronym;
use tasktrack::task::{
    domain::{TaskId, TaskState},
    services::{
        CreateTaskCommand, PromoteTaskCommand, TaskCommandError, TasksByStateQuery,
    },
};
use eyre::ensure;
use rstest::rstest;

fn create(username: &str, name: &str) -> CreateTaskCommand {
    CreateTaskCommand {
        credentials: login(username),
        app_acronym: AppAcronym::new("APP1"),
        task_name: name.to_owned(),
        description: Some("Found in review".to_owned()),
    }
}

fn list(username: &str, state: &str) -> TasksByStateQuery {
    TasksByStateQuery {
        credentials: login(username),
        app_acronym: AppAcronym::new("APP1"),
        state: state.to_owned(),
    }
}

fn promote(username: &str, app: &str, task_id: &str, notes: Option<&str>) -> PromoteTaskCommand {
    PromoteTaskCommand {
        credentials: login(username),
        app_acronym: AppAcronym::new(app),
        task_id: TaskId::new(task_id),
        notes: notes.map(str::to_owned),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_listed_under_open(tracker: Tracker) -> eyre::Result<()> {
    let service = tracker.service();
    let created = service
        .create_task(create("paula", "Write release notes"))
        .await?;

    let open = service.tasks_by_state(list("devon", "Open")).await?;
    let doing = service.tasks_by_state(list("devon", "Doing")).await?;

    ensure!(created.id().as_str() == "APP11", "first id is APP11, got {}", created.id());
    ensure!(open.len() == 1, "expected one open task, found {}", open.len());
    ensure!(open.first() == Some(&created), "listed task differs from created");
    ensure!(doing.is_empty(), "no task should be Doing");
    ensure!(
        created.description() == Some("Found in review"),
        "description is kept"
    );
    ensure!(
        created.notes().render().starts_with("Task created by paula on "),
        "unexpected notes {}",
        created.notes().render()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_moves_doing_to_done_and_logs_the_move(tracker: Tracker) -> eyre::Result<()> {
    tracker.seed_task("APP17", "APP1", TaskState::Doing);
    let service = tracker.service();

    let promoted = service
        .promote_to_done(promote("lena", "APP1", "APP17", Some("Verified on staging")))
        .await?;

    ensure!(promoted.state() == TaskState::Done, "task should be Done");
    ensure!(promoted.owner().as_str() == "lena", "promoter becomes owner");
    ensure!(promoted.creator().as_str() == "paula", "creator is unchanged");
    let rendered = promoted.notes().render();
    ensure!(
        rendered.starts_with("lena moved Task APP17 from Doing to Done on "),
        "unexpected notes {rendered}"
    );
    ensure!(
        rendered.ends_with("Verified on staging\n\nTask created by paula on 2026-01-05"),
        "remark and prior log should follow, got {rendered}"
    );

    let done = service.tasks_by_state(list("devon", "Done")).await?;
    ensure!(done.first() == Some(&promoted), "stored task matches returned task");
    Ok(())
}

#[rstest]
#[case(TaskState::Open)]
#[case(TaskState::ToDo)]
#[case(TaskState::Done)]
#[case(TaskState::Close)]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_only_starts_from_doing(tracker: Tracker, #[case] start: TaskState) {
    let seeded = tracker.seed_task("APP13", "APP1", start);

    let result = tracker
        .service()
        .promote_to_done(promote("lena", "APP1", "APP13", None))
        .await;

    assert!(matches!(result, Err(TaskCommandError::InvalidStateTransition(_))));
    let stored = tracker
        .service()
        .tasks_by_state(list("devon", start.as_str()))
        .await
        .expect("listing succeeds");
    assert_eq!(stored, vec![seeded]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn developers_cannot_promote(tracker: Tracker) {
    tracker.seed_task("APP12", "APP1", TaskState::Doing);

    let result = tracker
        .service()
        .promote_to_done(promote("devon", "APP1", "APP12", None))
        .await;

    assert!(matches!(result, Err(TaskCommandError::NotAuthorized)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disabled_account_is_rejected_even_with_the_right_group(tracker: Tracker) {
    tracker.seed_task("APP12", "APP1", TaskState::Doing);

    let result = tracker
        .service()
        .promote_to_done(promote("old_lead", "APP1", "APP12", None))
        .await;

    assert!(matches!(result, Err(TaskCommandError::AccountDisabled)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_application_is_reported(tracker: Tracker) {
    let result = tracker
        .service()
        .promote_to_done(promote("lena", "NOPE", "NOPE1", None))
        .await;

    assert!(matches!(
        result,
        Err(TaskCommandError::ApplicationNotFound(acronym)) if acronym.as_str() == "NOPE"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_scoped_to_one_application(tracker: Tracker) -> eyre::Result<()> {
    tracker.seed_task("APP11", "APP1", TaskState::ToDo);
    tracker.seed_task("OPS1", "OPS", TaskState::ToDo);

    let tasks = tracker.service().tasks_by_state(list("devon", "ToDo")).await?;

    let ids: Vec<&str> = tasks.iter().map(|task| task.id().as_str()).collect();
    ensure!(ids == ["APP11"], "unexpected ids {ids:?}");
    Ok(())
}
