use crate::{Edge, EdgeId, Graph, NodeId};
use std::iter;

/// Label of the synthetic source node. User graphs label their nodes from 1.
pub(crate) const SYNTHETIC_SOURCE: NodeId = NodeId::new(0);

/// Type which augments the inner graph with a synthetic source node, connected to every node of
/// the inner graph.
///
/// Inner edges keep their IDs. The synthetic edge into node `v` has ID `E + v`, where `E` is the
/// edge bound of the inner graph, so no edge storage is copied.
#[derive(Debug)]
pub(crate) struct WithSource<'a, G> {
    inner: &'a G,
    inner_edges: usize,
}

impl<'a, G: Graph> WithSource<'a, G> {
    pub(crate) fn new(inner: &'a G) -> Self {
        debug_assert!(
            !inner.has_node(SYNTHETIC_SOURCE),
            "Inner graph already uses the synthetic source label"
        );
        Self {
            inner,
            inner_edges: inner.edge_bound(),
        }
    }

    pub(crate) fn source(&self) -> NodeId {
        SYNTHETIC_SOURCE
    }

    /// Returns the inner edge ID, or `None` for synthetic edges.
    pub(crate) fn inner_edge(&self, id: EdgeId) -> Option<EdgeId> {
        (id.index() < self.inner_edges).then_some(id)
    }

    fn synthetic_edge(&self, to: NodeId) -> EdgeId {
        EdgeId::new(self.inner_edges + to.index())
    }
}

impl<G: Graph> Graph for WithSource<'_, G> {
    fn get_edge(&self, id: EdgeId) -> Option<Edge> {
        match id.index().checked_sub(self.inner_edges) {
            None => self.inner.get_edge(id),
            Some(label) => {
                let to = NodeId::new(label);
                self.inner.has_node(to).then_some(Edge {
                    from: SYNTHETIC_SOURCE,
                    to,
                })
            }
        }
    }

    fn nodes(&self) -> impl '_ + Iterator<Item = NodeId> {
        iter::once(SYNTHETIC_SOURCE).chain(self.inner.nodes())
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.inner
            .edges()
            .chain(self.inner.nodes().map(|node| self.synthetic_edge(node)))
    }

    fn node_bound(&self) -> usize {
        self.inner.node_bound().max(SYNTHETIC_SOURCE.index() + 1)
    }

    fn edge_bound(&self) -> usize {
        self.inner_edges + self.inner.node_bound()
    }

    fn has_node(&self, node: NodeId) -> bool {
        node == SYNTHETIC_SOURCE || self.inner.has_node(node)
    }

    fn num_nodes(&self) -> usize {
        self.inner.num_nodes() + 1
    }

    fn num_edges(&self) -> usize {
        self.inner.num_edges() + self.inner.num_nodes()
    }
}
