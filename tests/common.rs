//! Common test utilities for building flow graphs and editors.
use nagare::prelude::*;

/// Creates a message node with a fixed id and text, at the origin.
#[allow(dead_code)]
pub fn message_node(id: &str, text: &str) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        kind: NodeKind::Message,
        position: Position::new(0.0, 0.0),
        data: MessageData {
            text: text.to_string(),
        },
    }
}

/// Creates a directed edge with a fixed id.
#[allow(dead_code)]
pub fn edge_between(id: &str, source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Creates nodes `n0..n{len-1}` chained in order (`n0 -> n1 -> ...`),
/// a structurally valid linear flow.
#[allow(dead_code)]
pub fn linear_chain(len: usize) -> (Vec<FlowNode>, Vec<FlowEdge>) {
    let nodes: Vec<FlowNode> = (0..len)
        .map(|i| message_node(&format!("n{}", i), &format!("step {}", i)))
        .collect();
    let edges: Vec<FlowEdge> = (1..len)
        .map(|i| edge_between(&format!("e{}", i), &format!("n{}", i - 1), &format!("n{}", i)))
        .collect();
    (nodes, edges)
}

/// Creates an editor over a shared in-memory store and returns both handles,
/// so tests can inspect the store behind the editor's back.
#[allow(dead_code)]
pub fn editor_with_store() -> (FlowEditor, InMemoryStore) {
    let store = InMemoryStore::new();
    (FlowEditor::new(store.clone()), store)
}
