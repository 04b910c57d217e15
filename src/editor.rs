use crate::error::SaveError;
use crate::flow::{
    EdgeChange, FlowEdge, FlowGraph, FlowNode, NodeChange, NodeKind, Position, SavedFlow,
};
use crate::store::FlowStore;
use crate::validate::validate;

/// The outcome of a save attempt that produced no error.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The flow validated, was named, and is now in the store.
    Saved(SavedFlow),
    /// The user declined to name the flow; nothing was written.
    Cancelled,
}

/// The orchestration layer between the interaction surface and the model.
///
/// A `FlowEditor` owns the working graph, the current selection, and the
/// injected store. The rendering collaborator feeds it intents one at a
/// time and reads back `nodes`/`edges`/`selected_node_id` after each one.
/// It is also the single place where validation and persistence failures
/// become user-facing outcomes.
pub struct FlowEditor {
    graph: FlowGraph,
    selected_node_id: Option<String>,
    store: Box<dyn FlowStore>,
}

impl FlowEditor {
    /// Creates an editor with an empty working graph over the given store.
    pub fn new<S: FlowStore + 'static>(store: S) -> Self {
        Self {
            graph: FlowGraph::new(),
            selected_node_id: None,
            store: Box::new(store),
        }
    }

    // --- Intents from the interaction surface ---

    /// A node of the given kind was dropped onto the canvas.
    pub fn dropped(&mut self, kind: NodeKind, position: Position) -> FlowNode {
        self.graph.create_node(kind, position)
    }

    /// A connection gesture completed between two node ids.
    pub fn connected(&mut self, source: &str, target: &str) -> FlowEdge {
        self.graph.connect(source, target)
    }

    /// A batch of node deltas arrived for one interaction frame.
    ///
    /// Applies the batch in order, then reconciles the selection: if the
    /// batch removed the selected node, the selection is cleared before
    /// control returns to the surface.
    pub fn nodes_changed(&mut self, changes: &[NodeChange]) {
        self.graph.apply_node_changes(changes);
        if let Some(id) = &self.selected_node_id {
            if self.graph.node(id).is_none() {
                self.selected_node_id = None;
            }
        }
    }

    /// A batch of edge deltas arrived for one interaction frame.
    pub fn edges_changed(&mut self, changes: &[EdgeChange]) {
        self.graph.apply_edge_changes(changes);
    }

    /// A node was clicked; it becomes the selection.
    pub fn node_clicked(&mut self, id: &str) {
        self.selected_node_id = Some(id.to_string());
    }

    /// The settings panel was dismissed.
    pub fn clear_selection(&mut self) {
        self.selected_node_id = None;
    }

    /// The settings panel committed new text for a node. Returns `false`
    /// when the node no longer exists.
    pub fn set_node_text(&mut self, id: &str, text: &str) -> bool {
        self.graph.set_node_text(id, text)
    }

    // --- Read surface for rendering ---

    pub fn nodes(&self) -> &[FlowNode] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[FlowEdge] {
        self.graph.edges()
    }

    /// The whole working graph.
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn selected_node_id(&self) -> Option<&str> {
        self.selected_node_id.as_deref()
    }

    /// The selected node, if the selection still resolves to a live node.
    pub fn selected_node(&self) -> Option<&FlowNode> {
        self.selected_node_id
            .as_deref()
            .and_then(|id| self.graph.node(id))
    }

    /// Every stored flow in save order, e.g. for a load menu.
    pub fn saved_flows(&self) -> Vec<SavedFlow> {
        self.store.load_all()
    }

    // --- Save / load orchestration ---

    /// Attempts to persist the working graph as a named snapshot.
    ///
    /// The steps run strictly in order:
    ///
    /// 1. The validator checks the graph. On failure the name supplier is
    ///    never consulted and nothing is written.
    /// 2. `name_supplier` is asked for a name. `None` or an empty string is
    ///    a user cancellation, which aborts with `SaveOutcome::Cancelled`
    ///    and no error.
    /// 3. A deep snapshot is captured under a fresh id and appended to the
    ///    store.
    ///
    /// On a storage failure the error is returned and the working graph is
    /// left untouched, so the user can retry the save as-is.
    pub fn try_save(
        &self,
        name_supplier: impl FnOnce() -> Option<String>,
    ) -> Result<SaveOutcome, SaveError> {
        validate(self.graph.nodes(), self.graph.edges())?;

        let Some(name) = name_supplier().filter(|name| !name.is_empty()) else {
            return Ok(SaveOutcome::Cancelled);
        };

        let snapshot = SavedFlow::capture(&name, &self.graph);
        self.store.append(snapshot.clone())?;

        tracing::info!(
            flow_id = %snapshot.id,
            flow_name = %snapshot.name,
            nodes = snapshot.nodes.len(),
            edges = snapshot.edges.len(),
            "Flow saved"
        );
        Ok(SaveOutcome::Saved(snapshot))
    }

    /// Replaces the working graph with a stored flow's containers and
    /// clears the selection.
    pub fn load_flow(&mut self, flow: &SavedFlow) {
        self.graph
            .replace_all(flow.nodes.clone(), flow.edges.clone());
        self.selected_node_id = None;
        tracing::debug!(
            flow_id = %flow.id,
            flow_name = %flow.name,
            "Flow loaded into working graph"
        );
    }
}
