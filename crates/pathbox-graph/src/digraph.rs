//! Edge-list directed graph with per-edge lengths.
use crate::algorithms::{johnson, shortest_shortest_path, JohnsonConfig};
use crate::errors::{GraphError, NegativeCycleDetected};
use crate::{Distance, DistanceMatrix, Edge, EdgeId, Graph, NodeId, Weight};

/// Directed graph with `V` nodes labelled `1..=V`, and a list of edges each carrying a length.
///
/// Parallel edges and self-loops are allowed. Every edge endpoint is checked against the node
/// count when the edge is added, so the algorithms never see an out-of-range label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Digraph<W> {
    vertex_count: usize,
    edges: Vec<Edge>,
    lengths: Vec<W>,
}

impl<W> Default for Digraph<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<W> Digraph<W> {
    /// Create a graph with `vertex_count` nodes and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Create a graph with `vertex_count` nodes and room for `edge_count` edges.
    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(edge_count),
            lengths: Vec::with_capacity(edge_count),
        }
    }

    /// Create a graph from a list of `(tail, head, length)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexIndexOutOfRange`] on the first edge referring to a label
    /// outside of `1..=vertex_count`.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self, GraphError> {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(vertex_count, edges.size_hint().0);
        for (from, to, length) in edges {
            graph.add_edge(from, to, length)?;
        }
        Ok(graph)
    }

    /// Number of nodes `V`.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges `E`.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a new node, labelled `V + 1`.
    pub fn add_node(&mut self) -> NodeId {
        self.vertex_count += 1;
        NodeId::new(self.vertex_count)
    }

    /// Adds an edge to the graph.
    ///
    /// # Arguments
    ///
    /// - `from`: Label of the source node (tail).
    /// - `to`  : Label of the target node (head).
    /// - `length`: Length of the edge, may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexIndexOutOfRange`] if either label is not in `1..=V`.
    pub fn add_edge(&mut self, from: usize, to: usize, length: W) -> Result<EdgeId, GraphError> {
        let edge = Edge {
            from: self.node(from)?,
            to: self.node(to)?,
        };
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        self.lengths.push(length);
        Ok(id)
    }

    /// Returns the length of the given edge.
    ///
    /// # Panics
    ///
    /// Panics if the edge does not exist in this graph.
    pub fn length(&self, id: EdgeId) -> W
    where
        W: Copy,
    {
        self.lengths[id.index()]
    }

    /// Returns the length of the given edge, if it exists.
    pub fn get_length(&self, id: EdgeId) -> Option<&W> {
        self.lengths.get(id.index())
    }

    /// Edge lengths, indexed by [`EdgeId::index`].
    pub fn lengths(&self) -> &[W] {
        &self.lengths
    }

    /// Iterates over all edges along with their lengths.
    pub fn iter_edges(&self) -> impl '_ + Iterator<Item = (EdgeId, Edge, &W)> {
        self.edges
            .iter()
            .zip(&self.lengths)
            .enumerate()
            .map(|(i, (edge, length))| (EdgeId::new(i), *edge, length))
    }

    fn node(&self, label: usize) -> Result<NodeId, GraphError> {
        if (1..=self.vertex_count).contains(&label) {
            Ok(NodeId::new(label))
        } else {
            Err(GraphError::VertexIndexOutOfRange {
                label,
                vertex_count: self.vertex_count,
            })
        }
    }
}

impl<W: Weight> Digraph<W> {
    /// Computes the distance matrix between all pairs of nodes, using the stored edge lengths.
    ///
    /// See [`johnson()`] for details.
    pub fn all_pairs(
        &self,
        config: &JohnsonConfig,
    ) -> Result<DistanceMatrix<W>, NegativeCycleDetected> {
        johnson(self, |id| self.length(id), config)
    }

    /// Computes the smallest distance between two distinct nodes, using the stored edge lengths.
    ///
    /// See [`shortest_shortest_path`] for details.
    pub fn shortest_shortest_path(
        &self,
        config: &JohnsonConfig,
    ) -> Result<Distance<W>, NegativeCycleDetected> {
        shortest_shortest_path(self, |id| self.length(id), config)
    }
}

impl<W> Graph for Digraph<W> {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id.index()).copied()
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        (1..=self.vertex_count).map(NodeId::new)
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::new)
    }

    fn node_bound(&self) -> usize {
        self.vertex_count + 1
    }

    fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    fn has_node(&self, node: NodeId) -> bool {
        (1..=self.vertex_count).contains(&node.index())
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        id.index() < self.edges.len()
    }

    fn num_nodes(&self) -> usize {
        self.vertex_count
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
