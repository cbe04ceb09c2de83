use crate::NodeId;
use thiserror::Error;

/// Error returned when a shortest path search encounters a cycle of negative total length.
///
/// Shortest paths are undefined for every node reachable through such a cycle. The error is a
/// property of the input graph: running the search again yields the same error.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
#[error("Negative cycle detected: distance to node {node} can still be decreased")]
pub struct NegativeCycleDetected {
    /// Node whose distance could still be improved after all relaxation passes. It lies on, or is
    /// reachable from, a negative cycle.
    pub node: NodeId,
}

/// An error occurred while building a graph.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum GraphError {
    /// An edge refers to a node label outside of `1..=vertex_count`.
    #[error("Node label {label} is out of range for a graph with {vertex_count} nodes")]
    VertexIndexOutOfRange {
        /// Offending label
        label: usize,
        /// Number of nodes of the graph
        vertex_count: usize,
    },
}
