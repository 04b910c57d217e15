use super::node::Position;

/// A single incremental node update reported by the rendering collaborator.
///
/// Changes arrive batched per interaction frame and are applied in batch
/// order, see `FlowGraph::apply_node_changes`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    /// The node was dragged to a new position.
    Moved { id: String, position: Position },
    /// The node was removed from the canvas.
    Removed { id: String },
}

/// A single incremental edge update reported by the rendering collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
    /// The edge was removed from the canvas.
    Removed { id: String },
}
