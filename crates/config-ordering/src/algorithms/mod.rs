//! Algorithms module for configuration ordering
//!
//! Contains:
//! - Stable Kahn's topological sort
//! - Dependency graph builder

pub mod dependency_builder;
pub mod kahns;

pub use dependency_builder::build_dependency_graph;
pub use kahns::kahns_topological_sort;
