use thiserror::Error;

/// Errors raised by the save-time structural validator.
///
/// These are recoverable and user-facing: the user resolves them by editing
/// the graph and trying the save again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("More than one node has no incoming connection ({count} entry candidates)")]
    MultipleEntryPoints { count: usize },

    #[error("Node '{node_id}' has {count} outgoing connections, at most one is allowed")]
    MultipleOutgoingEdges { node_id: String, count: usize },
}

/// Errors raised by a flow store while persisting.
///
/// Read-side problems never surface as values: a store recovers from an
/// absent or corrupt slot by treating it as empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Failed to encode saved flows: {reason}")]
    EncodeFailed { reason: String },

    #[error("Failed to write saved flows to '{slot}': {reason}")]
    WriteFailed { slot: String, reason: String },
}

/// Errors surfaced by `FlowEditor::try_save`.
///
/// A declined name prompt is not an error and is reported separately, as
/// `SaveOutcome::Cancelled`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Cannot save flow: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Flow could not be persisted: {0}")]
    Storage(#[from] StorageError),
}
