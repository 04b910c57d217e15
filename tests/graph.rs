//! Unit tests for the working graph containers.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_create_node_assigns_fresh_ids_and_default_text() {
    let mut graph = FlowGraph::new();
    let first = graph.create_node(NodeKind::Message, Position::new(10.0, 20.0));
    let second = graph.create_node(NodeKind::Message, Position::new(30.0, 40.0));

    assert_ne!(first.id, second.id);
    assert_eq!(first.text(), DEFAULT_MESSAGE_TEXT);
    assert_eq!(second.text(), DEFAULT_MESSAGE_TEXT);
    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.node(&first.id), Some(&first));
}

#[test]
fn test_move_node_updates_only_the_target() {
    let mut graph = FlowGraph::from_parts(
        vec![message_node("a", "one"), message_node("b", "two")],
        vec![edge_between("e1", "a", "b")],
    );

    graph.move_node("a", Position::new(99.0, -5.0));

    assert_eq!(graph.node("a").unwrap().position, Position::new(99.0, -5.0));
    assert_eq!(graph.node("b").unwrap().position, Position::new(0.0, 0.0));
    assert_eq!(graph.edges().len(), 1);
}

#[test]
fn test_move_node_is_a_noop_for_unknown_ids() {
    let mut graph = FlowGraph::from_parts(vec![message_node("a", "one")], vec![]);
    let before = graph.clone();

    graph.move_node("ghost", Position::new(1.0, 1.0));

    assert_eq!(graph, before);
}

#[test]
fn test_set_node_text_reports_missing_nodes() {
    let mut graph = FlowGraph::from_parts(vec![message_node("a", "old")], vec![]);

    assert!(graph.set_node_text("a", "new"));
    assert_eq!(graph.node("a").unwrap().text(), "new");
    assert!(!graph.set_node_text("ghost", "ignored"));
}

#[test]
fn test_connect_permits_temporarily_invalid_shapes() {
    // Fan-out, duplicates and self-loops are all legal while editing;
    // only the save-time validator rejects them.
    let mut graph = FlowGraph::from_parts(
        vec![message_node("a", ""), message_node("b", "")],
        vec![],
    );

    graph.connect("a", "b");
    graph.connect("a", "b");
    let loop_edge = graph.connect("a", "a");

    assert_eq!(graph.edges().len(), 3);
    assert_eq!(graph.edge(&loop_edge.id), Some(&loop_edge));
}

#[test]
fn test_remove_node_drops_incident_edges() {
    let (nodes, edges) = linear_chain(3);
    let mut graph = FlowGraph::from_parts(nodes, edges);

    assert!(graph.remove_node("n1"));

    assert_eq!(graph.nodes().len(), 2);
    assert!(graph.node("n1").is_none());
    // Both n0 -> n1 and n1 -> n2 referenced the removed node.
    assert!(graph.edges().is_empty());
}

#[test]
fn test_remove_node_reports_unknown_ids() {
    let mut graph = FlowGraph::from_parts(vec![message_node("a", "")], vec![]);
    assert!(!graph.remove_node("ghost"));
    assert_eq!(graph.nodes().len(), 1);
}

#[test]
fn test_remove_edge_only_touches_that_edge() {
    let (nodes, edges) = linear_chain(3);
    let mut graph = FlowGraph::from_parts(nodes, edges);

    assert!(graph.remove_edge("e1"));
    assert!(!graph.remove_edge("e1"));

    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].id, "e2");
}

#[test]
fn test_changes_apply_in_batch_order() {
    let mut graph = FlowGraph::from_parts(
        vec![message_node("a", ""), message_node("b", "")],
        vec![edge_between("e1", "a", "b")],
    );

    // The move after the removal targets a node that is already gone and
    // must be skipped silently.
    graph.apply_node_changes(&[
        NodeChange::Moved {
            id: "a".to_string(),
            position: Position::new(5.0, 5.0),
        },
        NodeChange::Removed { id: "a".to_string() },
        NodeChange::Moved {
            id: "a".to_string(),
            position: Position::new(50.0, 50.0),
        },
    ]);

    assert!(graph.node("a").is_none());
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());

    graph.apply_edge_changes(&[EdgeChange::Removed {
        id: "already-gone".to_string(),
    }]);
    assert_eq!(graph.nodes().len(), 1);
}

#[test]
fn test_replace_all_discards_previous_state() {
    let mut graph = FlowGraph::from_parts(
        vec![message_node("old", "stale")],
        vec![edge_between("e1", "old", "old")],
    );
    let (nodes, edges) = linear_chain(2);

    graph.replace_all(nodes.clone(), edges.clone());

    assert_eq!(graph.nodes(), nodes.as_slice());
    assert_eq!(graph.edges(), edges.as_slice());
    assert!(graph.node("old").is_none());
}
