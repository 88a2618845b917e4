//! Routes action paths to the task command handlers.

use mockable::Clock;
use serde_json::{Map, Value};
use tracing::debug;

use super::{
    ActionResponse, ActionStatus, FieldError, parse_create_task, parse_promote_task,
    parse_tasks_by_state,
};
use crate::task::services::TaskCommandService;

const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Actions reachable through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionRoute {
    /// Create a task.
    CreateTask,
    /// List tasks in one state.
    GetTaskByState,
    /// Promote a task from `Doing` to `Done`.
    PromoteTask2Done,
}

impl ActionRoute {
    /// Resolves an action path.
    ///
    /// One leading `/` is stripped. Paths that still contain a special
    /// character are rejected before route lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ActionStatus::InvalidActionPath`] for paths with special
    /// characters and [`ActionStatus::UnknownAction`] for any other
    /// unregistered path.
    pub fn parse(path: &str) -> Result<Self, ActionStatus> {
        let name = path.strip_prefix('/').unwrap_or(path);
        if name.chars().any(|ch| SPECIAL_CHARACTERS.contains(ch)) {
            return Err(ActionStatus::InvalidActionPath);
        }
        match name {
            "CreateTask" => Ok(Self::CreateTask),
            "GetTaskbyState" => Ok(Self::GetTaskByState),
            "PromoteTask2Done" => Ok(Self::PromoteTask2Done),
            _ => Err(ActionStatus::UnknownAction),
        }
    }

    /// Returns the path segment the route is registered under.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CreateTask => "CreateTask",
            Self::GetTaskByState => "GetTaskbyState",
            Self::PromoteTask2Done => "PromoteTask2Done",
        }
    }
}

/// Entry point for inbound actions.
#[derive(Clone)]
pub struct ActionDispatcher<C>
where
    C: Clock + Send + Sync,
{
    service: TaskCommandService<C>,
}

impl<C> ActionDispatcher<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher over the command service.
    #[must_use]
    pub const fn new(service: TaskCommandService<C>) -> Self {
        Self { service }
    }

    /// Runs one action and reports its outcome.
    ///
    /// A body that is not a JSON object is treated as an empty object.
    pub async fn dispatch(&self, path: &str, body: &Value) -> ActionResponse {
        let route = match ActionRoute::parse(path) {
            Ok(route) => route,
            Err(status) => {
                debug!(path, status = %status, "rejected action path");
                return ActionResponse::status_only(status);
            }
        };

        let empty = Map::new();
        let fields = body.as_object().unwrap_or(&empty);
        self.run(route, fields)
            .await
            .unwrap_or_else(ActionResponse::status_only)
    }

    async fn run(
        &self,
        route: ActionRoute,
        fields: &Map<String, Value>,
    ) -> Result<ActionResponse, ActionStatus> {
        match route {
            ActionRoute::CreateTask => {
                let command = parse_create_task(fields).map_err(|err| rejected(route, err))?;
                let task = self.service.create_task(command).await.map_err(ActionStatus::from)?;
                Ok(ActionResponse::created(&task))
            }
            ActionRoute::GetTaskByState => {
                let query = parse_tasks_by_state(fields).map_err(|err| rejected(route, err))?;
                let tasks = self.service.tasks_by_state(query).await.map_err(ActionStatus::from)?;
                Ok(ActionResponse::listed(&tasks))
            }
            ActionRoute::PromoteTask2Done => {
                let command = parse_promote_task(fields).map_err(|err| rejected(route, err))?;
                self.service.promote_to_done(command).await.map_err(ActionStatus::from)?;
                Ok(ActionResponse::status_only(ActionStatus::Success))
            }
        }
    }
}

fn rejected(route: ActionRoute, err: FieldError) -> ActionStatus {
    debug!(action = route.path(), error = %err, "rejected request body");
    match err {
        FieldError::Missing => ActionStatus::MissingParameters,
        FieldError::InvalidType => ActionStatus::InvalidFieldType,
    }
}
