//! Johnson's all-pairs shortest paths.
//!
//! Combines one Bellman-Ford search, to compute node potentials that remove negative edge
//! lengths, with one Dijkstra search per node on the reweighted graph.
use super::{bellman_ford, dijkstra, reweight};
use crate::errors::NegativeCycleDetected;
use crate::wrappers::WithSource;
use crate::{AdjacencyList, Distance, DistanceMatrix, EdgeId, FromGraph, Graph, NodeId, Weight};

/// Configuration of [`johnson()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JohnsonConfig {
    /// Run the per-node Dijkstra searches on the rayon thread pool. Requires the `parallel`
    /// feature; ignored (with a warning) without it.
    pub parallel: bool,
}

impl JohnsonConfig {
    /// Default configuration: sequential execution.
    pub const fn new() -> Self {
        Self { parallel: false }
    }

    /// Sets whether the Dijkstra searches run in parallel.
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Computes the shortest distances between all pairs of nodes using Johnson's algorithm.
///
/// Edge lengths may be negative. The algorithm proceeds in these steps:
///
/// 1. Augment the graph with a synthetic source connected to every node by a zero-length edge.
/// 2. Run [`bellman_ford`] on it from the synthetic source. A negative cycle anywhere in the
///    graph aborts the computation here, before any Dijkstra search.
/// 3. Use the resulting distances as potentials `p` to [`reweight()`] the original edges, making
///    all lengths non-negative.
/// 4. Run [`dijkstra`] from every node on the reweighted graph.
/// 5. Shift the distances back: `d(u, v) = d'(u, v) - p[u] + p[v]`.
///
/// The running time is `O(n * m log n)`, which beats
/// [`floyd_warshall`](super::floyd_warshall) on sparse graphs.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait. It must not use the label
///   `0`, which is reserved for the synthetic source.
/// - `edge_weight`: A closure that returns the length of a given edge.
/// - `config`: Execution options.
///
/// ### Errors
///
/// Returns [`NegativeCycleDetected`] if the graph contains a cycle of negative total length. No
/// partial result is produced.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::{johnson, Digraph, Distance, JohnsonConfig, NodeId};
///
/// let graph = Digraph::from_edges(3, [(1, 2, -2), (2, 3, 3), (3, 1, 4)]).unwrap();
/// let matrix = johnson(&graph, |id| graph.length(id), &JohnsonConfig::new()).unwrap();
///
/// assert_eq!(Distance::Finite(1), matrix.get(NodeId::new(1), NodeId::new(3)));
/// assert_eq!(Distance::Finite(2), matrix.get(NodeId::new(3), NodeId::new(2)));
/// ```
#[profiling::function]
pub fn johnson<G: Graph, W: Weight>(
    graph: &G,
    edge_weight: impl Fn(EdgeId) -> W,
    config: &JohnsonConfig,
) -> Result<DistanceMatrix<W>, NegativeCycleDetected> {
    let augmented = WithSource::new(graph);
    log::debug!(
        "johnson: augmented graph has {} nodes and {} edges",
        augmented.num_nodes(),
        augmented.num_edges()
    );

    let potentials = bellman_ford(&augmented, augmented.source(), |id| {
        augmented.inner_edge(id).map_or_else(W::zero, &edge_weight)
    })
    .inspect_err(|err| log::debug!("johnson: aborting, {err}"))?
    .into_distances()
    .into_iter()
    .map(|d| d.finite().unwrap_or_else(W::zero))
    .collect::<Vec<_>>();

    let lengths = reweight(graph, &edge_weight, &potentials);
    let adj = AdjacencyList::from_graph(graph);
    log::debug!("johnson: reweighted {} edges", adj.num_edges());

    let sources = graph.nodes().collect::<Vec<_>>();
    let rows = run_from_each(&sources, config.parallel, |source| {
        log::trace!("johnson: dijkstra from node {source}");
        let mut row = dijkstra(&adj, source, |id| lengths[id.index()]).into_distances();
        unweight(&mut row, &potentials, source);
        row
    });

    let mut matrix = DistanceMatrix::new(sources, graph.node_bound());
    for (source, row) in matrix.nodes().to_vec().into_iter().zip(&rows) {
        matrix.set_row(source, row);
    }
    log::debug!("johnson: computed distances from {} nodes", rows.len());
    Ok(matrix)
}

/// Undoes the reweighting on the distances from `source`.
fn unweight<W: Weight>(row: &mut [Distance<W>], potentials: &[W], source: NodeId) {
    let offset = potentials[source.index()];
    for (distance, &potential) in row.iter_mut().zip(potentials) {
        *distance = distance.map(|d| d - offset + potential);
    }
}

#[cfg(feature = "parallel")]
fn run_from_each<W: Weight>(
    sources: &[NodeId],
    parallel: bool,
    search: impl Fn(NodeId) -> Vec<Distance<W>> + Sync,
) -> Vec<Vec<Distance<W>>> {
    use rayon::prelude::*;

    if parallel {
        sources.par_iter().map(|&source| search(source)).collect()
    } else {
        sources.iter().map(|&source| search(source)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_from_each<W: Weight>(
    sources: &[NodeId],
    parallel: bool,
    search: impl Fn(NodeId) -> Vec<Distance<W>> + Sync,
) -> Vec<Vec<Distance<W>>> {
    if parallel {
        log::warn!("johnson: parallel execution requested, but the `parallel` feature is disabled");
    }
    sources.iter().map(|&source| search(source)).collect()
}
