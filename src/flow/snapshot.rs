use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::edge::FlowEdge;
use super::graph::FlowGraph;
use super::node::FlowNode;

/// A named, immutable snapshot of a working graph.
///
/// A record is created by a successful save and never modified afterwards,
/// the store only ever appends whole records. Serializes to the persisted
/// wire shape `{"id", "name", "nodes": [...], "edges": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFlow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl SavedFlow {
    /// Captures a deep snapshot of the graph under a fresh v4 UUID id.
    ///
    /// The record owns independent copies of the containers: later edits to
    /// the live graph cannot reach back into it.
    pub fn capture(name: &str, graph: &FlowGraph) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }
}
