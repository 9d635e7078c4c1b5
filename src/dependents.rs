// src/dependents.rs

//! Transitive-dependent queries for cascade blocking and notification.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::Result;
use crate::source::DependencySource;
use crate::types::{DependencyEdge, TaskId, WorkflowStatus};

/// Answers "which tasks transitively depend on this one?" within a single
/// workflow status.
///
/// Two-phase use: construct, then [`initialize`](Self::initialize) (or
/// [`load_edges`](Self::load_edges)) for a status, then query. Queries
/// against an uninitialized resolver return empty sets; that is the defined
/// behaviour, not an error. Results are memoized per instance and the memo
/// is dropped whenever the resolver is re-initialized, so state never leaks
/// across statuses or snapshots.
#[derive(Debug, Default)]
pub struct DependentResolver {
    scope: Option<WorkflowStatus>,
    dependents: HashMap<TaskId, Vec<TaskId>>,
    memo: HashMap<TaskId, BTreeSet<TaskId>>,
}

impl DependentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status this resolver was last initialized for, if any.
    pub fn scope(&self) -> Option<WorkflowStatus> {
        self.scope
    }

    pub fn is_initialized(&self) -> bool {
        self.scope.is_some()
    }

    /// Fetch the status's dependency edges from `source` and rebuild the
    /// dependents map from them.
    ///
    /// No project filter is applied: cascades span the whole status.
    pub async fn initialize<S: DependencySource + ?Sized>(
        &mut self,
        source: &S,
        status: WorkflowStatus,
    ) -> Result<()> {
        let edges = source.fetch_dependency_edges(status, None).await?;
        self.load_edges(status, &edges);
        Ok(())
    }

    /// Rebuild the dependents map from an already-fetched edge list.
    ///
    /// Edges not fully inside `status` are skipped with a `warn`; duplicates
    /// collapse. Replaces any previous state and clears the memo.
    pub fn load_edges(&mut self, status: WorkflowStatus, edges: &[DependencyEdge]) {
        let mut dependents: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
        let mut seen: HashSet<(TaskId, TaskId)> = HashSet::new();

        for edge in edges {
            if !edge.is_homogeneous(status) {
                warn!(
                    task = %edge.task_id,
                    depends_on = %edge.depends_on_id,
                    task_status = %edge.task_status,
                    depends_on_status = %edge.depends_on_status,
                    status = %status,
                    "skipping dependency edge outside the requested status"
                );
                continue;
            }
            if !seen.insert((edge.depends_on_id, edge.task_id)) {
                continue;
            }
            dependents.entry(edge.depends_on_id).or_default().push(edge.task_id);
        }

        debug!(
            status = %status,
            edges = seen.len(),
            "loaded dependency edges into dependent resolver"
        );

        self.scope = Some(status);
        self.dependents = dependents;
        self.memo.clear();
    }

    /// All tasks that transitively depend on `task`, excluding `task` itself.
    ///
    /// Iterative depth-first walk with a visited set, so even a cyclic edge
    /// list (which levelization would reject) cannot loop. Unknown ids and
    /// tasks nothing depends on both return an empty set. Memoized per
    /// instance.
    pub fn dependent_task_ids(&mut self, task: TaskId) -> BTreeSet<TaskId> {
        if self.scope.is_none() {
            debug!(task = %task, "dependent query before initialization; returning empty set");
            return BTreeSet::new();
        }

        if let Some(cached) = self.memo.get(&task) {
            return cached.clone();
        }

        let mut result: BTreeSet<TaskId> = BTreeSet::new();
        let mut stack: Vec<TaskId> = self.dependents.get(&task).cloned().unwrap_or_default();

        while let Some(id) = stack.pop() {
            // A cycle may lead back to the start id; its own dependents were
            // the seed, so it is skipped rather than re-expanded.
            if id != task && result.insert(id) {
                if let Some(next) = self.dependents.get(&id) {
                    stack.extend(next.iter().copied());
                }
            }
        }

        self.memo.insert(task, result.clone());
        result
    }

    /// Direct dependents of a task (tasks that wait on it).
    pub fn direct_dependents_of(&self, task: TaskId) -> &[TaskId] {
        self.dependents
            .get(&task)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }
}
