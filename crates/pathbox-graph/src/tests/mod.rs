
use crate::*;

fn sample() -> Digraph<i32> {
    Digraph::from_edges(3, [(2, 1, 1), (1, 2, 3), (1, 3, 2), (1, 2, 7)]).unwrap()
}

#[test]
fn test_has_edge() {
    let graph = sample();
    assert!(graph.has_edge_between(NodeId::new(1), NodeId::new(3)));
    assert!(!graph.has_edge_between(NodeId::new(3), NodeId::new(1)));
}

#[test]
fn test_incoming_edges() {
    let graph = sample();
    let incoming: Vec<EdgeId> = graph.incoming(NodeId::new(1)).collect();
    assert_eq!(incoming, vec![EdgeId::new(0)]);
}

#[test]
fn test_outgoing_edges() {
    let graph = sample();
    let outgoing: Vec<EdgeId> = graph.outgoing(NodeId::new(1)).collect();
    assert_eq!(outgoing, vec![EdgeId::new(1), EdgeId::new(2), EdgeId::new(3)]);
}

#[test]
fn test_parallel_edges_between() {
    let graph = sample();
    let between: Vec<EdgeId> = graph.edges_between(NodeId::new(1), NodeId::new(2)).collect();
    assert_eq!(between, vec![EdgeId::new(1), EdgeId::new(3)]);
}

#[test]
fn test_node_display() {
    assert_eq!("42", NodeId::new(42).to_string());
}
