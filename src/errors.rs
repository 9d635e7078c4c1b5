// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

use crate::types::{PlanScope, TaskId};

#[derive(Error, Debug)]
pub enum DagplanError {
    /// The dependency graph for a scope contains at least one cycle.
    ///
    /// `tasks` holds the ids actually involved in a cycle (sorted), not the
    /// whole set of tasks that were blocked behind it.
    #[error("cycle detected among tasks [{}] ({scope})", join_ids(.tasks))]
    CycleDetected { scope: PlanScope, tasks: Vec<TaskId> },

    /// A dependency edge referenced a task id that is not in the fetched
    /// task-id set for the scope.
    #[error("dependency edges reference unknown tasks [{}] ({scope})", join_ids(.missing))]
    UnknownReference { scope: PlanScope, missing: Vec<TaskId> },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DagplanError>;

fn join_ids(ids: &[TaskId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
