//! In-memory integration tests for identifier minting.

use std::collections::HashSet;

use super::helpers::{Tracker, login, tracker};
use tasktrack::application::{
    domain::{AppAcronym, RunningNumber},
    ports::ApplicationRepository,
};
use mockable::DefaultClock;
use tasktrack::identity::domain::Username;
use tasktrack::task::{
    domain::{NewTask, Task, TaskId, TaskName},
    ports::{RunningNumberClaim, TaskRepository, TaskRepositoryError},
    services::{CreateFailure, CreateTaskCommand, TaskCommandError},
};
use rstest::rstest;

fn create(app: &str, name: &str) -> CreateTaskCommand {
    CreateTaskCommand {
        credentials: login("paula"),
        app_acronym: AppAcronym::new(app),
        task_name: name.to_owned(),
        description: None,
    }
}

async fn counter(tracker: &Tracker, app: &str) -> RunningNumber {
    tracker
        .applications
        .find_by_acronym(&AppAcronym::new(app))
        .await
        .expect("lookup succeeds")
        .expect("application exists")
        .running_number()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_application_counts_independently(tracker: Tracker) {
    let service = tracker.service();

    let first = service.create_task(create("APP1", "a")).await.expect("create");
    let second = service.create_task(create("APP1", "b")).await.expect("create");
    let other = service.create_task(create("OPS", "c")).await.expect("create");

    assert_eq!(first.id().as_str(), "APP11");
    assert_eq!(second.id().as_str(), "APP12");
    assert_eq!(other.id().as_str(), "OPS1");
    assert_eq!(counter(&tracker, "APP1").await, RunningNumber::new(2));
    assert_eq!(counter(&tracker, "OPS").await, RunningNumber::new(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parallel_creates_mint_distinct_ids(tracker: Tracker) {
    let service = tracker.service();
    let handles: Vec<_> = (0..16)
        .map(|index| {
            let worker = service.clone();
            tokio::spawn(async move {
                worker
                    .create_task(create("APP1", &format!("t{index}")))
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    let mut conflicts = 0_usize;
    for handle in handles {
        match handle.await.expect("task joins") {
            Ok(task) => assert!(ids.insert(task.id().clone()), "duplicate id {}", task.id()),
            Err(TaskCommandError::CreateFailed(CreateFailure::Store(
                TaskRepositoryError::RunningNumberConflict { .. },
            ))) => conflicts += 1,
            Err(other) => panic!("unexpected failure: {other}"),
        }
    }

    let minted = u64::try_from(ids.len()).expect("small count");
    assert_eq!(counter(&tracker, "APP1").await, RunningNumber::new(minted));
    assert_eq!(ids.len() + conflicts, 16);
    assert_eq!(tracker.tasks.task_count().expect("count"), ids.len());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_claim_leaves_store_untouched(tracker: Tracker) {
    tracker
        .service()
        .create_task(create("APP1", "first"))
        .await
        .expect("create");
    let late = Task::create(
        NewTask {
            id: TaskId::new("APP11"),
            name: TaskName::new("late").expect("valid name"),
            description: None,
            app_acronym: AppAcronym::new("APP1"),
            creator: Username::new("paula"),
        },
        &DefaultClock,
    );

    let result = tracker
        .tasks
        .create_with_running_number(
            &late,
            RunningNumberClaim {
                previous: RunningNumber::new(0),
                next: RunningNumber::new(1),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::RunningNumberConflict { .. })
    ));
    assert_eq!(tracker.tasks.task_count().expect("count"), 1);
    assert_eq!(counter(&tracker, "APP1").await, RunningNumber::new(1));
}
