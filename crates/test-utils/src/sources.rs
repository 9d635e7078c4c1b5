use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use dagplan::{DependencyEdge, DependencySource, ProjectId, TaskId, WorkflowStatus};

/// A source whose fetches always fail, for error-propagation tests.
#[derive(Debug, Clone, Default)]
pub struct FailingSource;

#[async_trait]
impl DependencySource for FailingSource {
    async fn fetch_dependency_edges(
        &self,
        status: WorkflowStatus,
        _project: Option<ProjectId>,
    ) -> Result<Vec<DependencyEdge>> {
        Err(anyhow!("dependency store unavailable (status {status})"))
    }

    async fn fetch_task_ids(
        &self,
        status: WorkflowStatus,
        _project: Option<ProjectId>,
    ) -> Result<BTreeSet<TaskId>> {
        Err(anyhow!("task store unavailable (status {status})"))
    }
}

/// Wraps another source and counts fetches, for call-discipline tests.
///
/// Clones share their counters, so a clone kept outside stays observable
/// after the original moves into a planner.
#[derive(Debug, Clone)]
pub struct CountingSource<S> {
    inner: S,
    edge_fetches: Arc<AtomicUsize>,
    id_fetches: Arc<AtomicUsize>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            edge_fetches: Arc::new(AtomicUsize::new(0)),
            id_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `fetch_dependency_edges` has been called.
    pub fn edge_fetches(&self) -> usize {
        self.edge_fetches.load(Ordering::SeqCst)
    }

    /// How many times `fetch_task_ids` has been called.
    pub fn id_fetches(&self) -> usize {
        self.id_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: DependencySource> DependencySource for CountingSource<S> {
    async fn fetch_dependency_edges(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<Vec<DependencyEdge>> {
        self.edge_fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_dependency_edges(status, project).await
    }

    async fn fetch_task_ids(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<BTreeSet<TaskId>> {
        self.id_fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_task_ids(status, project).await
    }
}
