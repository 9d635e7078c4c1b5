#![allow(dead_code)]

use dagplan::{DependencyEdge, InMemorySource, ProjectId, TaskId, WorkflowStatus};

/// Builder for an [`InMemorySource`] scenario to simplify test setup.
///
/// Task and project ids are taken as raw `i64`s so test bodies stay terse.
pub struct ScenarioBuilder {
    source: InMemorySource,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self {
            source: InMemorySource::new(),
        }
    }

    /// Register a task with no project membership.
    pub fn task(self, id: i64, status: WorkflowStatus) -> Self {
        self.source.add_task(TaskId(id), status);
        self
    }

    /// Register a task inside a project.
    pub fn task_in(self, id: i64, status: WorkflowStatus, project: i64) -> Self {
        self.source.add_task_in(TaskId(id), status, ProjectId(project));
        self
    }

    /// Register several tasks, all in the same status.
    pub fn tasks(mut self, ids: &[i64], status: WorkflowStatus) -> Self {
        for &id in ids {
            self = self.task(id, status);
        }
        self
    }

    /// Add a dependency link where both endpoints share `status`:
    /// `task` waits for `depends_on`.
    pub fn link(self, depends_on: i64, task: i64, status: WorkflowStatus) -> Self {
        self.source.link(TaskId(depends_on), TaskId(task), status);
        self
    }

    /// Register tasks `ids[0] <- ids[1] <- ...` as a chain where each task
    /// waits on the previous one.
    pub fn chain(mut self, ids: &[i64], status: WorkflowStatus) -> Self {
        self = self.tasks(ids, status);
        for pair in ids.windows(2) {
            self = self.link(pair[0], pair[1], status);
        }
        self
    }

    /// Add a raw dependency row, endpoint statuses included.
    pub fn edge(self, edge: DependencyEdge) -> Self {
        self.source.push_edge(edge);
        self
    }

    pub fn build(self) -> InMemorySource {
        self.source
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}
