//! Queries answered from the all-pairs distances.
use super::{johnson, JohnsonConfig};
use crate::errors::NegativeCycleDetected;
use crate::{Distance, EdgeId, Graph, Weight};

/// Returns the "shortest shortest path" of the graph: the smallest distance between two distinct
/// nodes.
///
/// Runs [`johnson()`] and takes the minimum of the off-diagonal entries of the distance matrix.
/// Self-distances are never considered, even when negative self-loops would otherwise make them
/// smaller (such graphs are rejected as containing a negative cycle anyway).
///
/// ### Returns
///
/// - `Ok(Distance::Finite(d))`: the smallest distance between two distinct nodes;
/// - `Ok(Distance::Unreachable)`: no node reaches another node, which includes graphs with fewer
///   than two nodes;
/// - `Err(NegativeCycleDetected)`: the graph contains a negative cycle.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::{shortest_shortest_path, Digraph, Distance, JohnsonConfig};
///
/// let graph = Digraph::from_edges(3, [(1, 2, 4), (2, 3, -3), (3, 1, 1)]).unwrap();
/// let min = shortest_shortest_path(&graph, |id| graph.length(id), &JohnsonConfig::new());
///
/// assert_eq!(Ok(Distance::Finite(-3)), min);
/// ```
#[profiling::function]
pub fn shortest_shortest_path<W: Weight>(
    graph: &impl Graph,
    edge_weight: impl Fn(EdgeId) -> W,
    config: &JohnsonConfig,
) -> Result<Distance<W>, NegativeCycleDetected> {
    let min = johnson(graph, edge_weight, config)?.min_distance();
    log::debug!("shortest shortest path: {min:?}");
    Ok(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Digraph;
    use rstest::rstest;

    #[rstest]
    #[case::chain(3, &[(1, 2, 1), (2, 3, 2), (1, 3, 5)], Distance::Finite(1))]
    #[case::negative_edge(3, &[(1, 2, 4), (2, 3, -3), (3, 1, 1)], Distance::Finite(-3))]
    #[case::path_beats_edge(3, &[(1, 2, -2), (2, 3, -2), (1, 3, 0)], Distance::Finite(-4))]
    #[case::no_edges(4, &[], Distance::Unreachable)]
    #[case::self_loops_only(2, &[(1, 1, 3), (2, 2, 0)], Distance::Unreachable)]
    #[case::single_node(1, &[], Distance::Unreachable)]
    fn test_shortest_shortest_path(
        #[case] vertex_count: usize,
        #[case] edges: &[(usize, usize, i64)],
        #[case] expected: Distance<i64>,
    ) {
        let graph = Digraph::from_edges(vertex_count, edges.iter().copied()).unwrap();
        assert_eq!(Ok(expected), graph.shortest_shortest_path(&JohnsonConfig::new()));
    }

    #[test]
    fn test_negative_cycle() {
        let graph = Digraph::from_edges(2, [(1, 2, 1), (2, 1, -2)]).unwrap();
        let result = graph.shortest_shortest_path(&JohnsonConfig::new());
        assert!(result.is_err());
    }
}
