// src/lib.rs

//! Status-scoped task-dependency planning.
//!
//! Given a snapshot of dependency edges fetched through a
//! [`DependencySource`], this crate splits the tasks of one workflow status
//! into independent connected components, orders each component into
//! parallelizable levels, rejects cycles loudly, and answers transitive
//! dependent queries for cascade handling.

pub mod dag;
pub mod dependents;
pub mod errors;
pub mod planner;
pub mod source;
pub mod types;

pub use dag::{
    compute_levels, ComponentGraph, ComponentPlan, DependencyGraph, DependencyPlan, DisjointSet,
};
pub use dependents::DependentResolver;
pub use errors::{DagplanError, Result};
pub use planner::{plan_snapshot, DependencyPlanner};
pub use source::memory::InMemorySource;
pub use source::DependencySource;
pub use types::{DependencyEdge, PlanScope, ProjectId, TaskId, WorkflowStatus};
