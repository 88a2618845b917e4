//! In-memory integration tests for wire-level action dispatch.

use super::helpers::{PASSWORD, Tracker, tracker};
use tasktrack::api::{ActionDispatcher, ActionStatus};
use tasktrack::task::domain::TaskState;
use rstest::rstest;
use serde_json::{Value, json};

async fn call(tracker: &Tracker, path: &str, body: Value) -> Value {
    let response = ActionDispatcher::new(tracker.service())
        .dispatch(path, &body)
        .await;
    serde_json::to_value(&response).expect("response serializes")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_over_the_wire(tracker: Tracker) {
    let created = call(
        &tracker,
        "/CreateTask",
        json!({
            "username": "paula",
            "password": PASSWORD,
            "Task_name": "Rotate keys",
            "Task_app_Acronym": "APP1",
            "Task_description": "",
        }),
    )
    .await;
    assert_eq!(created, json!({"code": "S001", "Task_id": "APP11"}));

    let listed = call(
        &tracker,
        "/GetTaskbyState",
        json!({
            "username": "devon",
            "password": PASSWORD,
            "Task_state": "Open",
            "Task_app_Acronym": "APP1",
        }),
    )
    .await;

    assert_eq!(listed["code"], "S001");
    let row = &listed["data"][0];
    assert_eq!(row["Task_id"], "APP11");
    assert_eq!(row["Task_name"], "Rotate keys");
    assert_eq!(row["Task_description"], Value::Null);
    assert_eq!(row["Task_state"], "Open");
    assert_eq!(row["Task_creator"], "paula");
    assert_eq!(row["Task_owner"], "paula");
    assert_eq!(row["Task_app_acronym"], "APP1");
    assert_eq!(row["Task_plan"], Value::Null);
    assert!(row.get("Task_app_Acronym").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_over_the_wire_reports_success_only(tracker: Tracker) {
    tracker.seed_task("APP14", "APP1", TaskState::Doing);

    let promoted = call(
        &tracker,
        "/PromoteTask2Done",
        json!({
            "username": "lena",
            "password": PASSWORD,
            "Task_id": "APP14",
            "Task_app_Acronym": "APP1",
            "Task_notes": null,
        }),
    )
    .await;

    assert_eq!(promoted, json!({"code": "S001"}));
}

#[rstest]
#[case("/PromoteTask2Done", json!({"username": "lena"}), ActionStatus::MissingParameters)]
#[case(
    "/PromoteTask2Done",
    json!({"username": "lena", "password": PASSWORD, "Task_id": 14, "Task_app_Acronym": "APP1"}),
    ActionStatus::InvalidFieldType
)]
#[case(
    "/PromoteTask2Done",
    json!({"username": "lena", "password": "nope", "Task_id": "APP14", "Task_app_Acronym": "APP1"}),
    ActionStatus::InvalidCredentials
)]
#[case(
    "/GetTaskbyState",
    json!({"username": "old_lead", "password": PASSWORD, "Task_state": "Open", "Task_app_Acronym": "APP1"}),
    ActionStatus::AccountDisabled
)]
#[case(
    "/CreateTask",
    json!({"username": "devon", "password": PASSWORD, "Task_name": "x", "Task_app_Acronym": "APP1"}),
    ActionStatus::NotAuthorized
)]
#[case(
    "/CreateTask",
    json!({"username": "paula", "password": PASSWORD, "Task_name": "", "Task_app_Acronym": "APP1"}),
    ActionStatus::CreateFailed
)]
#[case("/createtask", json!({}), ActionStatus::UnknownAction)]
#[case("/Create Task!", json!({}), ActionStatus::InvalidActionPath)]
#[tokio::test(flavor = "multi_thread")]
async fn failures_carry_only_their_code(
    tracker: Tracker,
    #[case] path: &str,
    #[case] body: Value,
    #[case] expected: ActionStatus,
) {
    let response = call(&tracker, path, body).await;

    assert_eq!(response, json!({ "code": expected.code() }));
    assert_eq!(tracker.tasks.task_count().expect("count"), 0);
}
