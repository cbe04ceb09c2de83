//! A module providing an adjacency list representation of a graph.
//!
//! This module defines the [`AdjacencyList`] struct and its implementation, giving constant-time
//! access to the incoming and outgoing edges of each node. Dijkstra searches run on this
//! representation, since they visit the outgoing edges of every finalized node.
use crate::{Edge, EdgeId, FromGraph, Graph, NodeId};

/// A graph represented as an adjacency list.
///
/// All maps are dense vectors indexed by [`NodeId::index`] and [`EdgeId::index`], sized by the
/// node and edge bounds of the graph it was built from.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    /// All nodes that belong to the graph.
    pub nodes: Vec<NodeId>,
    /// A mapping of edge indices to their associated [`Edge`] data.
    ///
    /// Indices with no edge in the source graph are `None`.
    pub edges: Vec<Option<Edge>>,
    /// A mapping of each node to its incoming edges.
    pub incoming: Vec<Vec<EdgeId>>,
    /// A mapping of each node to its outgoing edges.
    pub outgoing: Vec<Vec<EdgeId>>,
}

impl AdjacencyList {
    /// Create a new, empty adjacency list graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for AdjacencyList {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        self.edges.get(id.index()).copied().flatten()
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        self.nodes.iter().copied()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.is_some())
            .map(|(i, _)| EdgeId::new(i))
    }

    fn node_bound(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn incoming(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.incoming
            .get(node.index())
            .into_iter()
            .flatten()
            .copied()
    }

    fn outgoing(&self, node: NodeId) -> impl '_ + Iterator<Item = EdgeId> {
        self.outgoing
            .get(node.index())
            .into_iter()
            .flatten()
            .copied()
    }
}

impl FromGraph for AdjacencyList {
    fn from_graph(graph: &impl Graph) -> Self {
        let mut edges = vec![None; graph.edge_bound()];
        let mut incoming = vec![Vec::new(); graph.node_bound()];
        let mut outgoing = vec![Vec::new(); graph.node_bound()];
        for id in graph.edges() {
            let Some(edge) = graph.get_edge(id) else {
                continue;
            };
            edges[id.index()] = Some(edge);
            outgoing[edge.from.index()].push(id);
            incoming[edge.to.index()].push(id);
        }
        Self {
            nodes: graph.nodes().collect(),
            edges,
            incoming,
            outgoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digraph;

    #[test]
    fn test_from_graph_keeps_edge_order() {
        let graph = Digraph::from_edges(3, [(1, 2, 1), (1, 3, 1), (3, 1, 1), (1, 2, 5)]).unwrap();
        let adj = AdjacencyList::from_graph(&graph);

        let outgoing: Vec<_> = adj.outgoing(NodeId::new(1)).map(EdgeId::index).collect();
        let incoming: Vec<_> = adj.incoming(NodeId::new(2)).map(EdgeId::index).collect();
        assert_eq!(vec![0, 1, 3], outgoing);
        assert_eq!(vec![0, 3], incoming);
        assert_eq!(graph.node_bound(), adj.node_bound());
        assert_eq!(graph.num_edges(), adj.num_edges());
    }

    #[test]
    fn test_isolated_node_has_no_edges() {
        let graph = Digraph::from_edges(3, [(1, 2, 1)]).unwrap();
        let adj = AdjacencyList::from_graph(&graph);

        assert_eq!(0, adj.outgoing(NodeId::new(3)).count());
        assert_eq!(0, adj.incoming(NodeId::new(3)).count());
        assert_eq!(0, adj.outgoing(NodeId::new(99)).count());
    }
}
