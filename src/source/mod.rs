// src/source/mod.rs

use std::collections::BTreeSet;
use std::fmt::Debug;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{DependencyEdge, ProjectId, TaskId, WorkflowStatus};

pub mod memory;

/// Abstract store of tasks and the dependency links between them.
///
/// Implementations filter `fetch_dependency_edges` on the *dependent*
/// endpoint's status and report both endpoint statuses in the returned rows;
/// callers re-check that a row is fully inside the status they plan for.
/// `fetch_task_ids` exists so tasks without any edges still show up as
/// singleton components, and so dangling edge references can be told apart
/// from merely isolated tasks.
#[async_trait]
pub trait DependencySource: Send + Sync + Debug {
    /// Dependency rows visible in the given status (and project, when set).
    async fn fetch_dependency_edges(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<Vec<DependencyEdge>>;

    /// Ids of every task in the given status (and project, when set).
    async fn fetch_task_ids(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<BTreeSet<TaskId>>;
}
