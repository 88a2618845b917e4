//! Orchestration services for task commands.

mod commands;

pub use commands::{
    CreateFailure, CreateTaskCommand, PromoteTaskCommand, TaskCommandError, TaskCommandResult,
    TaskCommandService, TasksByStateQuery, TrackerPorts,
};
