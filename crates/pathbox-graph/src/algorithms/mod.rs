//! Module of algorithms working on graphs.
pub mod johnson;
pub mod path;
pub mod query;
pub mod reweight;

use crate::wrappers::WithSource;
use crate::{EdgeId, Graph, Weight};

pub use johnson::*;
pub use path::*;
pub use query::*;
pub use reweight::*;

/// Determines whether the given graph contains a cycle of negative total length.
///
/// Unlike a single [`bellman_ford`] search, this finds negative cycles anywhere in the graph, not
/// only those reachable from one starting node.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `edge_weight`: A closure that returns the length of a given edge.
///
/// ### Returns
///
/// - `true` if a negative cycle exists in the graph;
/// - `false` otherwise.
///
/// ### Notes
///
/// The search runs once from a synthetic source connected to every node by a zero-length edge,
/// as [`johnson()`] does, so the cost is that of a single Bellman-Ford search.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::Digraph;
/// use pathbox_graph::algorithms::has_negative_cycle;
///
/// let graph = Digraph::<i32>::from_edges(3, [(1, 2, 1), (2, 3, -1), (3, 2, 0)]).unwrap();
/// assert!(has_negative_cycle(&graph, |id| graph.length(id)));
/// assert!(!has_negative_cycle(&graph, |id| graph.length(id).abs()));
/// ```
pub fn has_negative_cycle<W: Weight>(
    graph: &impl Graph,
    edge_weight: impl Fn(EdgeId) -> W,
) -> bool {
    let augmented = WithSource::new(graph);
    bellman_ford(&augmented, augmented.source(), |id| {
        augmented.inner_edge(id).map_or_else(W::zero, &edge_weight)
    })
    .is_err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digraph;

    #[test]
    fn test_has_negative_cycle_unreachable_from_first_node() {
        let graph = Digraph::from_edges(4, [(1, 2, 5), (3, 4, -2), (4, 3, 1)]).unwrap();

        assert!(has_negative_cycle(&graph, |id| graph.length(id)));
        assert!(bellman_ford(&graph, crate::NodeId::new(1), |id| graph.length(id)).is_ok());
    }

    #[test]
    fn test_zero_cycle_is_not_negative() {
        let graph = Digraph::from_edges(2, [(1, 2, -3), (2, 1, 3)]).unwrap();
        assert!(!has_negative_cycle(&graph, |id| graph.length(id)));
    }

    #[test]
    fn test_negative_self_loop() {
        let graph = Digraph::from_edges(1, [(1, 1, -0.5)]).unwrap();
        assert!(has_negative_cycle(&graph, |id| graph.length(id)));
    }
}
