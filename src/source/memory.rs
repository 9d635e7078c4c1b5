// src/source/memory.rs

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use super::DependencySource;
use crate::types::{DependencyEdge, ProjectId, TaskId, WorkflowStatus};

/// One registered task: its status plus optional project membership.
#[derive(Debug, Clone, Copy)]
struct TaskRow {
    id: TaskId,
    status: WorkflowStatus,
    project: Option<ProjectId>,
}

/// In-process [`DependencySource`] backed by plain vectors.
///
/// Edges are stored as full rows, so callers can stage heterogeneous or
/// dangling references deliberately; `fetch_dependency_edges` only filters
/// on the dependent endpoint's status, exactly like a store that joins the
/// other endpoint in without constraining it.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<TaskRow>,
    edges: Vec<DependencyEdge>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task with no project membership.
    pub fn add_task(&self, id: TaskId, status: WorkflowStatus) {
        let mut inner = self.inner.lock().unwrap();
        inner.tasks.push(TaskRow {
            id,
            status,
            project: None,
        });
    }

    /// Register a task inside a project.
    pub fn add_task_in(&self, id: TaskId, status: WorkflowStatus, project: ProjectId) {
        let mut inner = self.inner.lock().unwrap();
        inner.tasks.push(TaskRow {
            id,
            status,
            project: Some(project),
        });
    }

    /// Add a dependency link where both endpoints share `status`:
    /// `task` waits for `depends_on`.
    pub fn link(&self, depends_on: TaskId, task: TaskId, status: WorkflowStatus) {
        self.push_edge(DependencyEdge::homogeneous(depends_on, task, status));
    }

    /// Add a raw dependency row, endpoint statuses included.
    pub fn push_edge(&self, edge: DependencyEdge) {
        let mut inner = self.inner.lock().unwrap();
        inner.edges.push(edge);
    }
}

#[async_trait]
impl DependencySource for InMemorySource {
    async fn fetch_dependency_edges(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<Vec<DependencyEdge>> {
        let inner = self.inner.lock().unwrap();
        let edges = inner
            .edges
            .iter()
            .filter(|edge| {
                if edge.task_status != status {
                    return false;
                }
                match project {
                    None => true,
                    // Project membership hangs off the dependent task's row.
                    Some(p) => inner
                        .tasks
                        .iter()
                        .any(|t| t.id == edge.task_id && t.project == Some(p)),
                }
            })
            .copied()
            .collect();
        Ok(edges)
    }

    async fn fetch_task_ids(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<BTreeSet<TaskId>> {
        let inner = self.inner.lock().unwrap();
        let ids = inner
            .tasks
            .iter()
            .filter(|t| {
                t.status == status
                    && match project {
                        None => true,
                        Some(p) => t.project == Some(p),
                    }
            })
            .map(|t| t.id)
            .collect();
        Ok(ids)
    }
}
