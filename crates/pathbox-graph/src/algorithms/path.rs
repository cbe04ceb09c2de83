//! Module of shortest path algorithms.
use crate::errors::NegativeCycleDetected;
use crate::{Distance, DistanceMatrix, Edge, EdgeId, Graph, NodeId, Weight};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Result of a single-source shortest path search.
///
/// Distances and predecessors are indexed by [`NodeId::index`], and sized by the node bound of
/// the searched graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: NodeId,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<NodeId>>,
}

impl<W: Weight> ShortestPaths<W> {
    fn new(source: NodeId, node_bound: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; node_bound];
        distances[source.index()] = Distance::zero();
        Self {
            source,
            distances,
            predecessors: vec![None; node_bound],
        }
    }

    /// Tries to shorten the path to the target of `edge` by going through it. Returns true if the
    /// distance was updated.
    #[inline]
    fn relax(&mut self, edge: Edge, length: W) -> bool {
        let Distance::Finite(from) = self.distances[edge.from.index()] else {
            return false;
        };
        let candidate = Distance::Finite(from + length);
        if candidate < self.distances[edge.to.index()] {
            self.distances[edge.to.index()] = candidate;
            self.predecessors[edge.to.index()] = Some(edge.from);
            true
        } else {
            false
        }
    }

    /// Distance from the source to `node`.
    pub fn distance(&self, node: NodeId) -> Distance<W> {
        self.distances
            .get(node.index())
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Returns the shortest path from the source to `node`, both ends included, or `None` if
    /// `node` is unreachable.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(node).is_finite() {
            return None;
        }
        let mut path = vec![node];
        let mut current = node;
        while current != self.source {
            current = self.predecessors[current.index()]?;
            path.push(current);
            if path.len() > self.predecessors.len() {
                // Predecessors only loop when the search hit a negative cycle
                return None;
            }
        }
        path.reverse();
        Some(path)
    }
}

impl<W> ShortestPaths<W> {
    /// Node the search started from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distances from the source, indexed by [`NodeId::index`].
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Node preceding `node` on its shortest path from the source, if any.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Predecessors of each node, indexed by [`NodeId::index`].
    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    /// Consumes the search result, returning the distances.
    pub fn into_distances(self) -> Vec<Distance<W>> {
        self.distances
    }
}

/// Finds the shortest path from a starting node to all other nodes in a graph
/// using the Bellman-Ford algorithm.
///
/// This algorithm computes the shortest path distances from a starting node `start`
/// to every other node in the graph. Edge lengths may be negative; cycles of negative total
/// length reachable from `start` are detected and reported as an error.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `start`: The starting node for the shortest path computation.
/// - `edge_weight`: A closure that returns the length of a given edge.
///
/// ### Returns
///
/// A [`Result`] containing:
///
/// - `Ok(ShortestPaths<W>)`: distances and predecessors from the starting node. Nodes that cannot
///   be reached are at [`Distance::Unreachable`].
/// - `Err(NegativeCycleDetected)`: If a negative cycle is reachable from `start`.
///
/// ### Notes
///
/// The algorithm runs at most `n - 1` relaxation passes over every edge (`n` being the number of
/// nodes), followed by one checking pass. It stops early once a pass changes nothing. The running
/// time is `O(n * m)`; for graphs without negative edges, [`dijkstra`] is faster.
///
/// ### Panics
///
/// Panics if `start` is not within the node bound of the graph.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::{Digraph, Distance, NodeId};
/// use pathbox_graph::algorithms::bellman_ford;
///
/// let graph = Digraph::from_edges(4, [(1, 2, 4), (1, 3, 1), (3, 2, -2), (2, 4, 1)]).unwrap();
/// let paths = bellman_ford(&graph, NodeId::new(1), |id| graph.length(id)).unwrap();
///
/// assert_eq!(Distance::Finite(-1), paths.distance(NodeId::new(2)));
/// assert_eq!(Distance::Finite(0), paths.distance(NodeId::new(4)));
/// let path: Vec<_> = paths.path_to(NodeId::new(4)).unwrap().into_iter().map(NodeId::index).collect();
/// assert_eq!(vec![1, 3, 2, 4], path);
/// ```
#[profiling::function]
pub fn bellman_ford<W: Weight>(
    graph: &impl Graph,
    start: NodeId,
    edge_weight: impl Fn(EdgeId) -> W,
) -> Result<ShortestPaths<W>, NegativeCycleDetected> {
    let edges = graph
        .edges()
        .filter_map(|id| graph.get_edge(id).map(|edge| (edge, edge_weight(id))))
        .collect::<Vec<_>>();
    let mut paths = ShortestPaths::new(start, graph.node_bound());
    let n = graph.num_nodes();
    for pass in 1..n {
        let mut changed = false;
        for &(edge, length) in &edges {
            changed |= paths.relax(edge, length);
        }
        if !changed {
            log::trace!("bellman_ford: converged after {pass} passes");
            break;
        }
    }

    for &(edge, length) in &edges {
        if paths.relax(edge, length) {
            return Err(NegativeCycleDetected { node: edge.to });
        }
    }

    Ok(paths)
}

/// Entry of the Dijkstra priority queue. Ordered so that [`BinaryHeap`] pops the smallest
/// distance first; ties go to the smallest node label.
#[derive(Debug, Copy, Clone)]
struct Candidate<W> {
    distance: W,
    node: NodeId,
}

impl<W: PartialOrd> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<W: PartialOrd> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for Candidate<W> {}

/// Finds the shortest path from a starting node to all other nodes in a graph with non-negative
/// edge lengths, using Dijkstra's algorithm.
///
/// Nodes are finalized in increasing order of distance, using a binary heap. Improved distances
/// are pushed as new heap entries; outdated entries are skipped when popped instead of being
/// removed, so no decrease-key operation is needed. The running time is `O(m log n)`.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait. Outgoing edges are queried
///   once per node, so an [`AdjacencyList`](crate::AdjacencyList) is the best fit.
/// - `start`: The starting node for the shortest path computation.
/// - `edge_weight`: A closure that returns the length of a given edge.
///
/// ### Notes
///
/// Edge lengths must not be negative. This is not checked: with negative lengths the returned
/// distances are unspecified, but the function still terminates. Finalized nodes are never
/// updated again, so the start node always keeps a distance of zero.
///
/// ### Panics
///
/// Panics if `start` is not within the node bound of the graph.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::{AdjacencyList, Digraph, Distance, FromGraph, NodeId};
/// use pathbox_graph::algorithms::dijkstra;
///
/// let graph = Digraph::from_edges(3, [(1, 2, 1.5), (2, 3, 2.0), (1, 3, 5.0)]).unwrap();
/// let adj = AdjacencyList::from_graph(&graph);
/// let paths = dijkstra(&adj, NodeId::new(1), |id| graph.length(id));
///
/// assert_eq!(Distance::Finite(3.5), paths.distance(NodeId::new(3)));
/// assert_eq!(Some(NodeId::new(2)), paths.predecessor(NodeId::new(3)));
/// ```
#[profiling::function]
pub fn dijkstra<W: Weight>(
    graph: &impl Graph,
    start: NodeId,
    edge_weight: impl Fn(EdgeId) -> W,
) -> ShortestPaths<W> {
    let mut paths = ShortestPaths::new(start, graph.node_bound());
    let mut finalized = vec![false; graph.node_bound()];
    let mut queue = BinaryHeap::new();
    queue.push(Candidate {
        distance: W::zero(),
        node: start,
    });

    while let Some(Candidate { distance, node }) = queue.pop() {
        if std::mem::replace(&mut finalized[node.index()], true) {
            continue;
        }
        for id in graph.outgoing(node) {
            let Some(edge) = graph.get_edge(id) else {
                continue;
            };
            if finalized[edge.to.index()] {
                continue;
            }
            let length = edge_weight(id);
            if paths.relax(edge, length) {
                queue.push(Candidate {
                    distance: distance + length,
                    node: edge.to,
                });
            }
        }
    }

    paths
}

/// Computes the shortest distances between all pairs of nodes in the graph using the
/// Floyd-Warshall algorithm.
///
/// This algorithm allows negative edge lengths but assumes the graph has no negative cycle; with
/// one, some diagonal entries end up negative. It runs in `O(n^3)` regardless of the number of
/// edges, which makes it a simple reference for [`johnson()`](crate::johnson()) on small graphs.
///
/// ### Arguments
///
/// - `graph`: A reference to a graph implementing the [`Graph`] trait.
/// - `edge_weight`: A closure that returns the length of a given edge.
///
/// ### Example
///
/// ```rust
/// use pathbox_graph::{Digraph, Distance, NodeId};
/// use pathbox_graph::algorithms::floyd_warshall;
///
/// let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 1), (1, 3, 1)]).unwrap();
/// let distances = floyd_warshall(&graph, |id| graph.length(id));
///
/// assert_eq!(Distance::Finite(1), distances.get(NodeId::new(1), NodeId::new(3)));
/// assert_eq!(Distance::Unreachable, distances.get(NodeId::new(3), NodeId::new(1)));
/// ```
pub fn floyd_warshall<W: Weight>(
    graph: &impl Graph,
    edge_weight: impl Fn(EdgeId) -> W,
) -> DistanceMatrix<W> {
    let nodes = graph.nodes().collect::<Vec<_>>();
    let mut distances = DistanceMatrix::new(nodes.clone(), graph.node_bound());
    for id in graph.edges() {
        let Some(Edge { from, to }) = graph.get_edge(id) else {
            continue;
        };
        let entry = &mut distances[(from, to)];
        *entry = Distance::min(*entry, Distance::Finite(edge_weight(id)));
    }
    for &k in &nodes {
        for &i in &nodes {
            let ik = distances[(i, k)];
            if !ik.is_finite() {
                continue;
            }
            for &j in &nodes {
                let through = ik + distances[(k, j)];
                if through < distances[(i, j)] {
                    distances[(i, j)] = through;
                }
            }
        }
    }

    distances
}
