//! Dense distance matrix produced by the all-pairs algorithms.
use crate::{Distance, NodeId, Weight};
use std::ops;

/// Row-major matrix of shortest path distances between every ordered pair of nodes.
///
/// The matrix is sized by the node bound of the graph it was computed from (`V + 1` for a
/// [`Digraph`](crate::Digraph)), so it can be indexed directly with node labels. Rows and columns
/// of labels that are not nodes of the graph (label `0` in particular) hold
/// [`Distance::Unreachable`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix<W> {
    nodes: Vec<NodeId>,
    size: usize,
    data: Vec<Distance<W>>,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Create a matrix where every node only reaches itself, with distance zero.
    ///
    /// # Arguments
    ///
    /// * `nodes`: Nodes of the graph
    /// * `size`: Node bound of the graph; all node indices must be lower than this.
    pub fn new(nodes: Vec<NodeId>, size: usize) -> Self {
        let mut matrix = Self {
            nodes,
            size,
            data: vec![Distance::Unreachable; size * size],
        };
        for i in 0..matrix.nodes.len() {
            let node = matrix.nodes[i];
            matrix[(node, node)] = Distance::zero();
        }
        matrix
    }

    /// Returns the distance from `from` to `to`, or [`Distance::Unreachable`] if either is
    /// outside of the matrix.
    pub fn get(&self, from: NodeId, to: NodeId) -> Distance<W> {
        self.offset(from, to)
            .map_or(Distance::Unreachable, |i| self.data[i])
    }

    /// Replaces a whole row of the matrix.
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside of the matrix, or if `row` isn't exactly [`Self::size`] long.
    pub fn set_row(&mut self, from: NodeId, row: &[Distance<W>]) {
        let start = from.index() * self.size;
        self.data[start..start + self.size].copy_from_slice(row);
    }

    /// Smallest distance between two distinct nodes of the graph.
    ///
    /// Returns [`Distance::Unreachable`] when no node reaches another one, including for graphs
    /// with less than two nodes.
    pub fn min_distance(&self) -> Distance<W> {
        self.iter()
            .filter(|(from, to, _)| from != to)
            .fold(Distance::Unreachable, |min, (_, _, d)| min.min(d))
    }
}

impl<W> DistanceMatrix<W> {
    /// Number of rows (and columns) of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Nodes of the graph this matrix was computed from.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Distances from `from` to every label, indexed by [`NodeId::index`].
    ///
    /// # Panics
    ///
    /// Panics if `from` is outside of the matrix.
    pub fn row(&self, from: NodeId) -> &[Distance<W>] {
        let start = from.index() * self.size;
        &self.data[start..start + self.size]
    }

    /// Iterates over the rows of the nodes of the graph, in node order.
    pub fn rows(&self) -> impl '_ + Iterator<Item = (NodeId, &[Distance<W>])> {
        self.nodes.iter().map(|&node| (node, self.row(node)))
    }

    /// Iterates over all ordered pairs of nodes of the graph, with their distance.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (NodeId, NodeId, Distance<W>)>
    where
        W: Copy,
    {
        self.nodes.iter().flat_map(move |&from| {
            self.nodes
                .iter()
                .map(move |&to| (from, to, self.row(from)[to.index()]))
        })
    }

    fn offset(&self, from: NodeId, to: NodeId) -> Option<usize> {
        (from.index() < self.size && to.index() < self.size)
            .then(|| from.index() * self.size + to.index())
    }
}

impl<W> ops::Index<(NodeId, NodeId)> for DistanceMatrix<W> {
    type Output = Distance<W>;

    fn index(&self, (from, to): (NodeId, NodeId)) -> &Self::Output {
        &self.row(from)[to.index()]
    }
}

impl<W> ops::IndexMut<(NodeId, NodeId)> for DistanceMatrix<W> {
    fn index_mut(&mut self, (from, to): (NodeId, NodeId)) -> &mut Self::Output {
        let start = from.index() * self.size;
        &mut self.data[start..start + self.size][to.index()]
    }
}
