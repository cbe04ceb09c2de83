use approx::assert_relative_eq;
use pathbox_graph::algorithms::floyd_warshall;
use pathbox_graph::{johnson, Digraph, Distance, GraphError, JohnsonConfig, NodeId};
use rstest::rstest;

fn node(label: usize) -> NodeId {
    NodeId::new(label)
}

fn render(graph: &Digraph<i64>) -> String {
    match graph.all_pairs(&JohnsonConfig::new()) {
        Ok(matrix) => matrix
            .rows()
            .map(|(_, row)| {
                row[1..]
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_chain_with_shortcut() {
    let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5)]).unwrap();
    insta::assert_snapshot!(render(&graph), @r"
    0 1 3
    inf 0 2
    inf inf 0
    ");
}

#[test]
fn test_negative_cycle_through_every_node() {
    let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 1, -10)]).unwrap();
    let err = graph.all_pairs(&JohnsonConfig::new()).unwrap_err();
    assert!((1..=3).contains(&err.node.index()));
    assert!(render(&graph).starts_with("Negative cycle detected"));
}

#[test]
fn test_negative_three_cycle() {
    // Total length of the cycle is -1
    let graph = Digraph::from_edges(3, [(1, 2, 1), (2, 3, 1), (3, 1, -3)]).unwrap();
    assert!(graph.all_pairs(&JohnsonConfig::new()).is_err());
    assert!(graph.shortest_shortest_path(&JohnsonConfig::new()).is_err());
}

#[test]
fn test_negative_edges_without_cycle() {
    let graph = Digraph::from_edges(4, [(1, 2, 3), (2, 3, -4), (3, 4, 2), (1, 4, 2), (4, 2, 3)]).unwrap();
    insta::assert_snapshot!(render(&graph), @r"
    0 3 -1 1
    inf 0 -4 -2
    inf 5 0 2
    inf 3 -1 0
    ");
    assert_eq!(Ok(Distance::Finite(-4)), graph.shortest_shortest_path(&JohnsonConfig::new()));
}

#[test]
fn test_distances_are_asymmetric() {
    let graph = Digraph::from_edges(2, [(1, 2, 1), (2, 1, 7)]).unwrap();
    let matrix = graph.all_pairs(&JohnsonConfig::new()).unwrap();

    assert_eq!(Distance::Finite(1), matrix.get(node(1), node(2)));
    assert_eq!(Distance::Finite(7), matrix.get(node(2), node(1)));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = Digraph::from_edges(4, [(1, 2, -2), (2, 3, 4), (3, 4, -1), (4, 1, 3)]).unwrap();
    let first = graph.all_pairs(&JohnsonConfig::new()).unwrap();
    let second = graph.all_pairs(&JohnsonConfig::new().with_parallel(true)).unwrap();

    assert_eq!(first, second);
    assert_eq!(floyd_warshall(&graph, |id| graph.length(id)), first);
}

#[test]
fn test_float_lengths() {
    let graph = Digraph::from_edges(3, [(1, 2, 0.1), (2, 3, 0.2), (1, 3, 0.5), (3, 1, -0.25)]).unwrap();
    let matrix = johnson(&graph, |id| graph.length(id), &JohnsonConfig::new()).unwrap();

    let Distance::Finite(d13) = matrix.get(node(1), node(3)) else {
        panic!("Node 3 should be reachable from node 1");
    };
    let Distance::Finite(d21) = matrix.get(node(2), node(1)) else {
        panic!("Node 1 should be reachable from node 2");
    };
    assert_relative_eq!(0.3, d13, epsilon = 1e-12);
    assert_relative_eq!(-0.05, d21, epsilon = 1e-12);
}

#[rstest]
#[case(0, 1)]
#[case(4, 1)]
#[case(1, 4)]
fn test_out_of_range_edge(#[case] from: usize, #[case] to: usize) {
    let err = Digraph::from_edges(3, [(1, 2, 1), (from, to, 1)]).unwrap_err();
    assert!(matches!(err, GraphError::VertexIndexOutOfRange { vertex_count: 3, .. }));
}

#[test]
fn test_error_messages() {
    let err = Digraph::from_edges(2, [(1, 5, 1)]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Node label 5 is out of range for a graph with 2 nodes");

    let graph = Digraph::from_edges(1, [(1, 1, -1)]).unwrap();
    let err = graph.all_pairs(&JohnsonConfig::new()).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Negative cycle detected: distance to node 1 can still be decreased");
}

#[cfg(feature = "serialize")]
#[test]
fn test_serialize_distances() {
    let graph = Digraph::from_edges(2, [(1, 2, 5)]).unwrap();
    let matrix = graph.all_pairs(&JohnsonConfig::new()).unwrap();

    assert_eq!(r#"{"Finite":5}"#, serde_json::to_string(&matrix.get(node(1), node(2))).unwrap());
    assert_eq!(r#""Unreachable""#, serde_json::to_string(&matrix.get(node(2), node(1))).unwrap());
    let json = serde_json::to_string(&matrix).unwrap();
    let back: pathbox_graph::DistanceMatrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(matrix, back);
}
