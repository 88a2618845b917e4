//! In-memory integration tests for promotion notifications.

use super::helpers::{Tracker, login, tracker};
use tasktrack::application::domain::AppAcronym;
use tasktrack::task::{
    domain::{TaskId, TaskState},
    services::PromoteTaskCommand,
};
use eyre::ensure;
use rstest::rstest;

fn promote(username: &str, task_id: &str) -> PromoteTaskCommand {
    PromoteTaskCommand {
        credentials: login(username),
        app_acronym: AppAcronym::new("APP1"),
        task_id: TaskId::new(task_id),
        notes: None,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_group_is_notified_after_promotion(tracker: Tracker) -> eyre::Result<()> {
    tracker.seed_task("APP15", "APP1", TaskState::Doing);
    let (service, worker) = tracker.notifying_service();

    service.promote_to_done(promote("lena", "APP15")).await?;
    drop(service);
    worker.join().await;

    let sent = tracker.sink.sent()?;
    ensure!(sent.len() == 1, "expected one notification, got {}", sent.len());
    let message = sent.first().ok_or_else(|| eyre::eyre!("no message"))?;
    let recipients: Vec<&str> = message.recipients().iter().map(|r| r.as_str()).collect();
    ensure!(
        recipients == ["lena@example.com", "old@example.com"],
        "unexpected recipients {recipients:?}"
    );
    ensure!(
        message.sender().map(|s| s.as_str()) == Some("tracker@example.com"),
        "sender should come from the dispatcher"
    );
    ensure!(message.subject() == "Task Promotion Notification", "subject");
    ensure!(
        message.body() == r#"The task "Task APP15" has been promoted to "Done"."#,
        "unexpected body {}",
        message.body()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_promotion_sends_nothing(tracker: Tracker) -> eyre::Result<()> {
    tracker.seed_task("APP15", "APP1", TaskState::ToDo);
    let (service, worker) = tracker.notifying_service();

    let result = service.promote_to_done(promote("lena", "APP15")).await;
    drop(service);
    worker.join().await;

    ensure!(result.is_err(), "promotion from ToDo must fail");
    ensure!(tracker.sink.sent()?.is_empty(), "no notification expected");
    Ok(())
}
