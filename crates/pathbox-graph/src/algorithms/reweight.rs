//! Edge reweighting with node potentials.
use crate::{EdgeId, Graph, Weight};

/// Shifts every edge length by the potentials of its endpoints.
///
/// Returns the new lengths, indexed by [`EdgeId::index`] and sized by the edge bound of the graph,
/// with `c' = c + p[from] - p[to]` for each edge. The topology of the graph is unchanged, and the
/// length of every path from `u` to `v` is shifted by the same amount `p[u] - p[v]`, so shortest
/// paths stay shortest.
///
/// If the potentials satisfy `p[to] <= p[from] + c` for every edge (as the distances computed by
/// [`bellman_ford`](super::bellman_ford) do), every new length is non-negative. Invalid potentials
/// are not detected.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `edge_weight`: A closure that returns the length of a given edge.
/// - `potentials`: Potential of each node, indexed by [`NodeId::index`](crate::NodeId::index).
///
/// ### Panics
///
/// Panics if `potentials` is shorter than the node bound of the graph.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::Digraph;
/// use pathbox_graph::algorithms::reweight;
///
/// let graph = Digraph::from_edges(2, [(1, 2, -3), (2, 1, 5)]).unwrap();
/// let lengths = reweight(&graph, |id| graph.length(id), &[0, 0, -3]);
///
/// assert_eq!(vec![0, 2], lengths);
/// ```
pub fn reweight<W: Weight>(
    graph: &impl Graph,
    edge_weight: impl Fn(EdgeId) -> W,
    potentials: &[W],
) -> Vec<W> {
    let mut lengths = vec![W::zero(); graph.edge_bound()];
    for id in graph.edges() {
        if let Some(edge) = graph.get_edge(id) {
            let shift = potentials[edge.from.index()] - potentials[edge.to.index()];
            lengths[id.index()] = edge_weight(id) + shift;
        }
    }
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bellman_ford;
    use crate::Digraph;

    #[test]
    fn test_zero_potentials_keep_lengths() {
        let graph = Digraph::from_edges(3, [(1, 2, -1), (2, 3, 4)]).unwrap();
        let lengths = reweight(&graph, |id| graph.length(id), &[0; 4]);
        assert_eq!(graph.lengths(), lengths.as_slice());
    }

    #[test]
    fn test_bellman_ford_potentials_remove_negative_lengths() {
        // Node 4 is the source of every potential
        let graph = Digraph::from_edges(
            4,
            [(1, 2, -2), (2, 3, -1), (1, 3, 1), (3, 1, 4), (4, 1, 0), (4, 2, 0), (4, 3, 0)],
        )
        .unwrap();
        let potentials = bellman_ford(&graph, crate::NodeId::new(4), |id| graph.length(id))
            .unwrap()
            .into_distances()
            .into_iter()
            .map(|d| d.finite().unwrap_or(0))
            .collect::<Vec<_>>();
        let lengths = reweight(&graph, |id| graph.length(id), &potentials);

        assert_eq!(vec![0, 0, -2, -3, 0], potentials);
        assert!(lengths.iter().all(|&c| c >= 0), "Negative reweighted length in {lengths:?}");
        // Cycle 1 -> 2 -> 3 -> 1 keeps its total length
        assert_eq!(1, lengths[0] + lengths[1] + lengths[3]);
    }
}
