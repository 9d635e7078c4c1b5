// src/planner.rs

//! Turns a dependency snapshot into per-component topological orderings.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};

use crate::dag::{compute_levels, ComponentPlan, DependencyGraph, DependencyPlan};
use crate::errors::{DagplanError, Result};
use crate::source::DependencySource;
use crate::types::{DependencyEdge, PlanScope, ProjectId, TaskId, WorkflowStatus};

/// Compute the plan for an already-fetched snapshot.
///
/// This is the pure core behind [`DependencyPlanner::topological_orderings`]
/// and is usable directly when the caller already holds the edges:
///
/// 1. edges not fully inside the scope's status are skipped (with a `warn`);
/// 2. kept edges must reference ids present in `task_ids`, otherwise a
///    [`DagplanError::UnknownReference`] lists the missing ids;
/// 3. the remaining edges plus every id in `task_ids` (so edge-less tasks
///    become singleton components) are split into components and levelized.
///
/// An empty snapshot produces an empty plan.
pub fn plan_snapshot(
    task_ids: &BTreeSet<TaskId>,
    edges: &[DependencyEdge],
    scope: &PlanScope,
) -> Result<DependencyPlan> {
    let mut kept: Vec<(TaskId, TaskId)> = Vec::new();
    let mut missing: BTreeSet<TaskId> = BTreeSet::new();

    for edge in edges {
        if !edge.is_homogeneous(scope.status) {
            warn!(
                task = %edge.task_id,
                depends_on = %edge.depends_on_id,
                task_status = %edge.task_status,
                depends_on_status = %edge.depends_on_status,
                scope = %scope,
                "skipping dependency edge outside the requested status"
            );
            continue;
        }

        for endpoint in [edge.depends_on_id, edge.task_id] {
            if !task_ids.contains(&endpoint) {
                missing.insert(endpoint);
            }
        }

        kept.push((edge.depends_on_id, edge.task_id));
    }

    if !missing.is_empty() {
        return Err(DagplanError::UnknownReference {
            scope: *scope,
            missing: missing.into_iter().collect(),
        });
    }

    let mut graph = DependencyGraph::new();
    for &id in task_ids {
        graph.insert_task(id);
    }
    for (depends_on, task) in kept {
        graph.insert_edge(depends_on, task);
    }

    debug!(
        scope = %scope,
        tasks = graph.task_count(),
        edges = graph.edge_count(),
        "built dependency graph from snapshot"
    );

    let mut components: Vec<ComponentPlan> = Vec::new();
    for component in graph.into_components() {
        components.push(ComponentPlan {
            levels: compute_levels(&component, scope)?,
        });
    }

    Ok(DependencyPlan { components })
}

/// Plans topological orderings for one scope at a time, fetching the
/// snapshot from an injected [`DependencySource`].
///
/// Every call fetches and computes from scratch; nothing is cached between
/// invocations, so concurrent callers never contend.
#[derive(Debug)]
pub struct DependencyPlanner<S> {
    source: S,
}

impl<S: DependencySource> DependencyPlanner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Topological orderings for every component of the given status (and
    /// project, when set).
    ///
    /// The fetch is the only async step; all computation is synchronous.
    pub async fn topological_orderings(
        &self,
        status: WorkflowStatus,
        project: Option<ProjectId>,
    ) -> Result<DependencyPlan> {
        let scope = PlanScope::new(status, project);

        let edges = self.source.fetch_dependency_edges(status, project).await?;
        let task_ids = self.source.fetch_task_ids(status, project).await?;

        debug!(
            scope = %scope,
            edges = edges.len(),
            tasks = task_ids.len(),
            "fetched dependency snapshot"
        );

        let plan = plan_snapshot(&task_ids, &edges, &scope)?;

        info!(
            scope = %scope,
            components = plan.component_count(),
            levels = plan.level_count(),
            tasks = plan.task_count(),
            "computed topological orderings"
        );

        Ok(plan)
    }
}
