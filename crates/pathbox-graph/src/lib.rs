#![warn(missing_docs)]
//! # Shortest-path graph engine
//!
//! Implements a directed graph model with signed edge lengths, and the shortest path algorithms
//! working on it: Bellman-Ford, Dijkstra, and Johnson's all-pairs shortest paths built from both.
//!
//! Graphs only use IDs to track nodes and edges. Algorithms take the length of each edge through
//! a callback (`Fn(EdgeId) -> W`), so any [`Graph`] implementation can be searched with any
//! length assignment. [`Digraph`] stores its own lengths and provides convenience entry points.
//!
//! ```
//! use pathbox_graph::{Digraph, Distance, JohnsonConfig, NodeId};
//!
//! let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5)]).unwrap();
//! let matrix = graph.all_pairs(&JohnsonConfig::default()).unwrap();
//!
//! assert_eq!(Distance::Finite(3), matrix.get(NodeId::new(1), NodeId::new(3)));
//! assert_eq!(Distance::Unreachable, matrix.get(NodeId::new(3), NodeId::new(1)));
//! assert_eq!(Distance::Finite(1), matrix.min_distance());
//! ```
use std::fmt;

pub mod adjacency;
pub mod algorithms;
pub mod digraph;
pub mod errors;
pub mod matrix;
pub mod weight;
mod wrappers;

pub use adjacency::AdjacencyList;
pub use algorithms::{johnson, shortest_shortest_path, JohnsonConfig, ShortestPaths};
pub use digraph::Digraph;
pub use errors::{GraphError, NegativeCycleDetected};
pub use matrix::DistanceMatrix;
pub use weight::{Distance, Weight};

/// Type of node IDs.
///
/// Nodes are labelled with integers. User graphs label their nodes in `1..=V`; the label `0` is
/// reserved for the synthetic source added by Johnson's algorithm.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Create a node ID from its label.
    pub const fn new(label: usize) -> Self {
        Self(label)
    }

    /// Index of this node in per-node arrays (equal to its label).
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type of edge IDs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(usize);

impl EdgeId {
    /// Create an edge ID from its index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index of this edge in per-edge arrays.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Edge data, connecting two nodes together.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    /// Source node (tail)
    pub from: NodeId,
    /// Target node (head)
    pub to: NodeId,
}

/// A trait representing a directed graph structure with basic graph operations.
///
/// This trait defines the minimal set of operations to interact with a graph,
/// including retrieving nodes, edges, and checking relationships between them.
///
/// # Examples
///
/// ```
/// use pathbox_graph::{Digraph, Graph, NodeId};
///
/// let graph = Digraph::from_edges(2, [(1, 2, 4)]).unwrap();
/// let (node1, node2) = (NodeId::new(1), NodeId::new(2));
///
/// assert!(graph.has_node(node1));
/// assert!(graph.has_edge_between(node1, node2));
/// assert!(!graph.has_edge_between(node2, node1));
/// ```
pub trait Graph {
    /// Returns the edge data (source and target node id) for this id, if it exists.
    ///
    /// # Arguments
    ///
    /// - `id`: Edge ID
    fn get_edge(&self, id: EdgeId) -> Option<Edge>;

    /// Returns an iterator over all nodes in the graph.
    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId>;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId>;

    /// One past the largest node index in the graph. Per-node arrays are allocated with this
    /// length.
    fn node_bound(&self) -> usize;

    /// One past the largest edge index in the graph. Per-edge arrays are allocated with this
    /// length.
    fn edge_bound(&self) -> usize;

    /// Checks whether the graph contains a specific node.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] to check for existence in the graph.
    fn has_node(&self, node: NodeId) -> bool {
        node.index() < self.node_bound() && self.nodes().any(|id| id == node)
    }

    /// Checks whether the graph contains an edge with a specific [`EdgeId`].
    ///
    /// # Arguments
    ///
    /// * `id` - The [`EdgeId`] to check for existence.
    fn has_edge(&self, id: EdgeId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Returns the total number of nodes in the graph.
    fn num_nodes(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the total number of edges in the graph.
    fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns true if the nodes are directly connected to each other in the graph.
    fn has_edge_between(&self, from: NodeId, to: NodeId) -> bool {
        self.edges_between(from, to).next().is_some()
    }

    /// Returns an iterator over all edges from `from` to `to`. Parallel edges are all returned.
    ///
    /// # Arguments
    ///
    /// * `from` - The [`NodeId`] of the source node.
    /// * `to` - The [`NodeId`] of the target node.
    fn edges_between(&self, from: NodeId, to: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.outgoing(from)
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.to == to))
    }

    /// Returns an iterator over all incoming edges for a given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] for which incoming edges are retrieved.
    fn incoming(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges()
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.to == node))
    }

    /// Returns an iterator over all outgoing edges for a given node.
    ///
    /// # Arguments
    ///
    /// * `node` - The [`NodeId`] for which outgoing edges are retrieved.
    fn outgoing(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges()
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.from == node))
    }
}

/// A trait for constructing a type from an existing [`Graph`] structure.
///
/// # Examples
///
/// ```
/// use pathbox_graph::{AdjacencyList, Digraph, FromGraph, Graph};
///
/// let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, -1)]).unwrap();
///
/// let adjacency_list = AdjacencyList::from_graph(&graph);
/// assert_eq!(adjacency_list.num_nodes(), graph.num_nodes());
/// assert_eq!(adjacency_list.num_edges(), graph.num_edges());
/// ```
pub trait FromGraph: Sized {
    /// Constructs an instance of a type by using an existing [`Graph`] structure.
    ///
    /// # Arguments
    ///
    /// * `graph` - A reference to an existing graph that will be used for constructing the new type.
    fn from_graph(graph: &impl Graph) -> Self;
}

#[cfg(test)]
mod tests;
