//! Parent-link graph of a network and the evaluation order derived from it.

pub mod dependency_graph;
pub mod ordering;

pub use dependency_graph::DependencyGraph;
pub use ordering::evaluation_order;
