// src/dag/plan.rs

//! Plan types produced by levelization.

use serde::{Deserialize, Serialize};

use crate::types::TaskId;

/// Levelized ordering of one connected component.
///
/// `levels[0]` holds the tasks with no unresolved prerequisites; every task
/// in `levels[k]` has all of its prerequisites in levels `0..k`, so each
/// level can proceed in parallel once the previous ones are resolved. Ids
/// within a level are sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPlan {
    pub levels: Vec<Vec<TaskId>>,
}

impl ComponentPlan {
    /// Number of tasks across all levels.
    pub fn task_count(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Index of the level containing `task`, if it is part of this component.
    pub fn level_of(&self, task: TaskId) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&task))
    }

    /// Flatten the levels into one valid sequential order.
    pub fn flatten(&self) -> Vec<TaskId> {
        self.levels.iter().flatten().copied().collect()
    }
}

/// Topological orderings for every component of one planning scope.
///
/// Components are ordered by their smallest task id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyPlan {
    pub components: Vec<ComponentPlan>,
}

impl DependencyPlan {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of tasks across all components.
    pub fn task_count(&self) -> usize {
        self.components.iter().map(|c| c.task_count()).sum()
    }

    /// Number of levels across all components.
    pub fn level_count(&self) -> usize {
        self.components.iter().map(|c| c.level_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The component containing `task`, if any.
    pub fn component_of(&self, task: TaskId) -> Option<&ComponentPlan> {
        self.components.iter().find(|c| c.level_of(task).is_some())
    }
}
