//! Unit tests for the save-time structural validator.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_empty_graph_is_valid() {
    assert_eq!(validate(&[], &[]), Ok(()));
}

#[test]
fn test_single_node_is_valid_without_edges() {
    let nodes = vec![message_node("a", "hi")];
    assert_eq!(validate(&nodes, &[]), Ok(()));
}

#[test]
fn test_single_node_is_valid_with_a_self_loop() {
    let nodes = vec![message_node("a", "hi")];
    let edges = vec![edge_between("e1", "a", "a")];
    assert_eq!(validate(&nodes, &edges), Ok(()));
}

#[test]
fn test_single_node_ignores_edges_with_foreign_endpoints() {
    // Leftovers from hand-edited data must not disturb a lone node.
    let nodes = vec![message_node("a", "hi")];
    let edges = vec![
        edge_between("e1", "ghost1", "a"),
        edge_between("e2", "ghost2", "elsewhere"),
    ];
    assert_eq!(validate(&nodes, &edges), Ok(()));
}

#[test]
fn test_two_disconnected_nodes_are_two_entry_points() {
    let nodes = vec![message_node("a", "hi"), message_node("b", "there")];
    assert_eq!(
        validate(&nodes, &[]),
        Err(ValidationError::MultipleEntryPoints { count: 2 })
    );
}

#[test]
fn test_linear_chain_is_valid() {
    let (nodes, edges) = linear_chain(3);
    assert_eq!(validate(&nodes, &edges), Ok(()));
}

#[test]
fn test_fan_out_is_rejected() {
    let nodes = vec![
        message_node("a", ""),
        message_node("b", ""),
        message_node("c", ""),
    ];
    let edges = vec![edge_between("e1", "a", "b"), edge_between("e2", "a", "c")];
    assert_eq!(
        validate(&nodes, &edges),
        Err(ValidationError::MultipleOutgoingEdges {
            node_id: "a".to_string(),
            count: 2
        })
    );
}

#[test]
fn test_duplicate_connections_count_toward_the_outgoing_limit() {
    let nodes = vec![message_node("a", ""), message_node("b", "")];
    let edges = vec![edge_between("e1", "a", "b"), edge_between("e2", "a", "b")];
    assert_eq!(
        validate(&nodes, &edges),
        Err(ValidationError::MultipleOutgoingEdges {
            node_id: "a".to_string(),
            count: 2
        })
    );
}

#[test]
fn test_outgoing_limit_applies_even_to_a_lone_node() {
    // Only the entry-point rule is gated on node count; a single node
    // sourcing two edges still exceeds the outgoing limit.
    let nodes = vec![message_node("a", "hi")];
    let edges = vec![edge_between("e1", "a", "a"), edge_between("e2", "a", "b")];
    assert_eq!(
        validate(&nodes, &edges),
        Err(ValidationError::MultipleOutgoingEdges {
            node_id: "a".to_string(),
            count: 2
        })
    );
}

#[test]
fn test_entry_point_rule_wins_when_both_rules_are_violated() {
    // `a` fans out into c and d while `b` dangles, so both rules fail;
    // the entry-point rule is checked first.
    let nodes = vec![
        message_node("a", ""),
        message_node("b", ""),
        message_node("c", ""),
        message_node("d", ""),
    ];
    let edges = vec![edge_between("e1", "a", "c"), edge_between("e2", "a", "d")];
    assert_eq!(
        validate(&nodes, &edges),
        Err(ValidationError::MultipleEntryPoints { count: 2 })
    );
}

#[test]
fn test_self_loop_counts_as_an_incoming_connection() {
    // `a` receives from itself and from `b`, so only `b` is an entry point.
    // Neither node exceeds one outgoing connection.
    let nodes = vec![message_node("a", ""), message_node("b", "")];
    let edges = vec![edge_between("e1", "a", "a"), edge_between("e2", "b", "a")];
    assert_eq!(validate(&nodes, &edges), Ok(()));
}

#[test]
fn test_validate_is_pure_and_repeatable() {
    let (nodes, edges) = linear_chain(4);
    assert_eq!(validate(&nodes, &edges), validate(&nodes, &edges));
    assert_eq!(nodes.len(), 4);
    assert_eq!(edges.len(), 3);

    // Same holds for a failing graph.
    let two = vec![message_node("a", ""), message_node("b", "")];
    assert_eq!(validate(&two, &[]), validate(&two, &[]));
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::MultipleEntryPoints { count: 3 };
    assert!(err.to_string().contains("More than one node"));
    assert!(err.to_string().contains("incoming"));
    assert!(err.to_string().contains('3'));

    let err = ValidationError::MultipleOutgoingEdges {
        node_id: "greet".to_string(),
        count: 2,
    };
    assert!(err.to_string().contains("Node 'greet'"));
    assert!(err.to_string().contains("outgoing"));
}
