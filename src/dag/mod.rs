// src/dag/mod.rs

//! Dependency-graph construction and levelized ordering.
//!
//! - [`disjoint_set`] groups task ids into connected components.
//! - [`graph`] builds adjacency and in-degree maps from dependency edges
//!   and splits them into per-component views.
//! - [`levels`] computes the level-by-level topological ordering of a
//!   component and reports cycles.
//! - [`plan`] defines the resulting plan types.

pub mod disjoint_set;
pub mod graph;
pub mod levels;
pub mod plan;

pub use disjoint_set::DisjointSet;
pub use graph::{ComponentGraph, DependencyGraph};
pub use levels::compute_levels;
pub use plan::{ComponentPlan, DependencyPlan};
