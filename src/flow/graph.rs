use super::change::{EdgeChange, NodeChange};
use super::edge::FlowEdge;
use super::node::{FlowNode, NodeKind, Position};

/// The authoritative working graph: the node and edge containers behind the
/// canvas.
///
/// The graph accepts any structure while the user edits, including duplicate
/// connections, fan-out and self-loops. Structure is only checked against
/// the flow invariants by `validate` when the user asks to save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from existing containers, e.g. out of a deserialized
    /// snapshot.
    pub fn from_parts(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Creates a node with a fresh id and default text, inserts it, and
    /// returns a copy of it.
    pub fn create_node(&mut self, kind: NodeKind, position: Position) -> FlowNode {
        let node = FlowNode::new(kind, position);
        self.nodes.push(node.clone());
        node
    }

    /// Moves the node with the given id, a no-op if the id is absent. No
    /// other node or edge is touched.
    pub fn move_node(&mut self, id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }

    /// Replaces the text payload of the node with the given id.
    ///
    /// Returns `false` when no node carries that id.
    pub fn set_node_text(&mut self, id: &str, text: &str) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.data.text = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Connects two node ids with a fresh edge and returns a copy of it.
    ///
    /// Nothing is rejected here: a second outgoing edge, a self-loop or an
    /// exact duplicate are all legal transient editing states and are caught
    /// by `validate` at save time instead.
    pub fn connect(&mut self, source: &str, target: &str) -> FlowEdge {
        let edge = FlowEdge::new(source, target);
        self.edges.push(edge.clone());
        edge
    }

    /// Removes the node with the given id together with every edge that
    /// references it as source or target, so the edge container never holds
    /// a connection into a deleted node.
    ///
    /// Returns `false` when the id is absent.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Removes the edge with the given id. Returns `false` when absent.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Applies a batch of node deltas in order, as one interaction frame.
    ///
    /// Unknown ids are skipped silently, so a delta that arrives after its
    /// node was removed earlier in the same frame simply has no effect.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        for change in changes {
            match change {
                NodeChange::Moved { id, position } => self.move_node(id, *position),
                NodeChange::Removed { id } => {
                    self.remove_node(id);
                }
            }
        }
    }

    /// Applies a batch of edge deltas in order, as one interaction frame.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        for change in changes {
            match change {
                EdgeChange::Removed { id } => {
                    self.remove_edge(id);
                }
            }
        }
    }

    /// Discards the current containers and installs the given ones, e.g.
    /// when a stored flow is loaded. Callers holding a selection or node
    /// references must invalidate them after this call.
    pub fn replace_all(&mut self, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) {
        self.nodes = nodes;
        self.edges = edges;
    }

    /// The nodes in insertion order, as the renderer consumes them.
    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    /// The edges in insertion order.
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&FlowEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// `true` when the graph holds neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
