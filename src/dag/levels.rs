//! Level-by-level topological ordering of one component.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::dag::graph::ComponentGraph;
use crate::errors::{DagplanError, Result};
use crate::types::{PlanScope, TaskId};

/// Compute the levelized topological ordering of a component.
///
/// Kahn's algorithm with frontier draining: the entire current frontier is
/// emitted as one level *before* its outgoing edges are applied, so a task
/// freed during a level joins the next level, never the current one. Ids
/// within a level come back sorted ascending.
///
/// If the emitted count falls short of the component's node count the
/// component is cyclic and a [`DagplanError::CycleDetected`] naming the
/// cyclic tasks (and the planning scope) is returned. No partial ordering
/// is ever handed out.
pub fn compute_levels(component: &ComponentGraph, scope: &PlanScope) -> Result<Vec<Vec<TaskId>>> {
    let mut remaining: HashMap<TaskId, usize> = component
        .members()
        .iter()
        .map(|&id| (id, component.in_degree_of(id)))
        .collect();

    // Members are sorted, so the seed frontier is too.
    let mut frontier: Vec<TaskId> = component
        .members()
        .iter()
        .copied()
        .filter(|&id| component.in_degree_of(id) == 0)
        .collect();

    let mut levels: Vec<Vec<TaskId>> = Vec::new();
    let mut emitted = 0usize;

    while !frontier.is_empty() {
        let level = frontier;
        let mut next: Vec<TaskId> = Vec::new();

        for &id in &level {
            for &succ in component.dependents_of(id) {
                if let Some(degree) = remaining.get_mut(&succ) {
                    *degree -= 1;
                    if *degree == 0 {
                        next.push(succ);
                    }
                }
            }
        }

        next.sort_unstable();
        emitted += level.len();
        levels.push(level);
        frontier = next;
    }

    if emitted != component.node_count() {
        let tasks = cyclic_tasks(component, &remaining);
        warn!(
            scope = %scope,
            emitted,
            total = component.node_count(),
            "component not fully levelized; cycle detected"
        );
        return Err(DagplanError::CycleDetected {
            scope: *scope,
            tasks,
        });
    }

    debug!(
        tasks = component.node_count(),
        levels = levels.len(),
        "levelized component"
    );

    Ok(levels)
}

/// Ids actually involved in a cycle, sorted ascending.
///
/// Everything that never reached in-degree zero forms the residue; within
/// it, the tasks sitting on a cycle are the members of non-trivial strongly
/// connected components (plus self-loops). Tasks merely blocked behind a
/// cycle are excluded, which keeps error messages focused.
fn cyclic_tasks(component: &ComponentGraph, remaining: &HashMap<TaskId, usize>) -> Vec<TaskId> {
    let mut residue: DiGraphMap<TaskId, ()> = DiGraphMap::new();

    for (&id, &degree) in remaining {
        if degree > 0 {
            residue.add_node(id);
        }
    }

    let stuck: Vec<TaskId> = residue.nodes().collect();
    for &id in &stuck {
        for &succ in component.dependents_of(id) {
            if residue.contains_node(succ) {
                residue.add_edge(id, succ, ());
            }
        }
    }

    let mut tasks: Vec<TaskId> = tarjan_scc(&residue)
        .into_iter()
        .filter(|scc| scc.len() > 1 || scc.first().is_some_and(|&n| residue.contains_edge(n, n)))
        .flatten()
        .collect();
    tasks.sort_unstable();

    if tasks.is_empty() {
        // Every residue node has an unresolved predecessor, so a cycle must
        // exist; fall back to the whole residue rather than an empty list.
        warn!("cycle residue had no strongly connected component; reporting full residue");
        tasks = stuck;
        tasks.sort_unstable();
    }

    tasks
}
