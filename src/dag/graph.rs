// src/dag/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::dag::disjoint_set::DisjointSet;
use crate::types::TaskId;

/// Mutable builder for a status-scoped dependency graph.
///
/// Holds forward adjacency (`depends_on -> dependents`), an in-degree entry
/// for every known task (zeros included), and a [`DisjointSet`] that tracks
/// connectivity while edges arrive. Duplicate edges collapse so a
/// prerequisite is only counted once; self-loops are kept so levelization
/// can surface them as one-node cycles.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    dependents: HashMap<TaskId, Vec<TaskId>>,
    in_degree: HashMap<TaskId, usize>,
    components: DisjointSet,
    seen_edges: HashSet<(TaskId, TaskId)>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task id, with or without edges. Idempotent.
    pub fn insert_task(&mut self, id: TaskId) -> bool {
        let newly = self.components.insert(id);
        if newly {
            self.in_degree.insert(id, 0);
        }
        newly
    }

    /// Record that `task` waits for `depends_on`.
    ///
    /// Registers both endpoints, joins their components and bumps `task`'s
    /// in-degree. Returns `false` for a duplicate of an already-recorded
    /// edge, which is otherwise ignored.
    pub fn insert_edge(&mut self, depends_on: TaskId, task: TaskId) -> bool {
        self.insert_task(depends_on);
        self.insert_task(task);

        if !self.seen_edges.insert((depends_on, task)) {
            debug!(task = %task, depends_on = %depends_on, "ignoring duplicate dependency edge");
            return false;
        }

        self.dependents.entry(depends_on).or_default().push(task);
        if let Some(degree) = self.in_degree.get_mut(&task) {
            *degree += 1;
        }

        if self.components.union(depends_on, task).is_none() {
            // Both endpoints were registered just above, so this cannot fire.
            warn!(task = %task, depends_on = %depends_on, "edge endpoint missing from component index");
        }

        true
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.components.contains(id)
    }

    /// Number of known task ids.
    pub fn task_count(&self) -> usize {
        self.components.len()
    }

    /// Number of distinct edges recorded so far.
    pub fn edge_count(&self) -> usize {
        self.seen_edges.len()
    }

    /// Direct dependents of a task (tasks that wait on it).
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.dependents
            .get(&id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Number of unresolved prerequisites recorded for a task. Unknown ids
    /// report zero.
    pub fn in_degree_of(&self, id: TaskId) -> usize {
        self.in_degree.get(&id).copied().unwrap_or(0)
    }

    /// Split the graph into its connected components.
    ///
    /// Components come back ordered by their smallest member id, each with
    /// adjacency and in-degree views restricted to that component. Since
    /// every recorded edge joined its endpoints in the disjoint set, a
    /// member's global adjacency already stays inside its component. An
    /// empty graph yields an empty vector.
    pub fn into_components(mut self) -> Vec<ComponentGraph> {
        let groups = self.components.groups();

        groups
            .into_iter()
            .map(|members| {
                let mut dependents = HashMap::new();
                let mut in_degree = HashMap::new();

                for &id in &members {
                    in_degree.insert(id, self.in_degree.get(&id).copied().unwrap_or(0));
                    if let Some(succ) = self.dependents.remove(&id) {
                        dependents.insert(id, succ);
                    }
                }

                ComponentGraph {
                    members,
                    dependents,
                    in_degree,
                }
            })
            .collect()
    }
}

/// Immutable view of one connected component of a [`DependencyGraph`].
#[derive(Debug, Clone)]
pub struct ComponentGraph {
    /// Member ids, sorted ascending.
    members: Vec<TaskId>,
    dependents: HashMap<TaskId, Vec<TaskId>>,
    in_degree: HashMap<TaskId, usize>,
}

impl ComponentGraph {
    pub fn members(&self) -> &[TaskId] {
        &self.members
    }

    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Direct dependents of a member task.
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        self.dependents
            .get(&id)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Unresolved-prerequisite count for a member task.
    pub fn in_degree_of(&self, id: TaskId) -> usize {
        self.in_degree.get(&id).copied().unwrap_or(0)
    }
}
