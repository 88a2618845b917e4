//! When steps for task promotion BDD scenarios.

use rstest_bdd_macros::when;
use serde_json::{Value, json};
use tasktrack::api::ActionDispatcher;

use super::world::{PASSWORD, PromotionWorld, run_async};

fn promote(world: &mut PromotionWorld, username: &str, task_id: &str, remark: Value) {
    let body = json!({
        "username": username,
        "password": PASSWORD,
        "Task_id": task_id,
        "Task_app_Acronym": "APP1",
        "Task_notes": remark,
    });
    let response = run_async(async {
        let (service, worker) = world.service();
        let response = ActionDispatcher::new(service)
            .dispatch("/PromoteTask2Done", &body)
            .await;
        worker.join().await;
        response
    });
    world.last_response = Some(response);
}

#[when(r#""{username}" promotes task "{task_id}" with remark "{remark}""#)]
fn promote_with_remark(
    world: &mut PromotionWorld,
    username: String,
    task_id: String,
    remark: String,
) {
    promote(world, &username, &task_id, Value::String(remark));
}

#[when(r#""{username}" promotes task "{task_id}" without a remark"#)]
fn promote_without_remark(world: &mut PromotionWorld, username: String, task_id: String) {
    promote(world, &username, &task_id, Value::Null);
}
