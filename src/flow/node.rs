use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Text payload assigned to a freshly created node.
pub const DEFAULT_MESSAGE_TEXT: &str = "New message";

/// The kind discriminator of a flow node.
///
/// Exactly one kind exists today. Further kinds extend this enum and bring
/// their own `data` payload shape alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A plain text message step.
    Message,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Message => write!(f, "message"),
        }
    }
}

/// A 2D canvas position, in the rendering collaborator's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The user-editable payload of a message node, nested under `data` on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageData {
    pub text: String,
}

/// A single element of the working flow graph.
///
/// Serializes to the rendering collaborator's node shape:
/// `{"id", "type", "position": {"x", "y"}, "data": {"text"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: MessageData,
}

impl FlowNode {
    /// Creates a node with a fresh v4 UUID id and the default message text.
    ///
    /// Ids are never reused, so a node keeps a stable identity from creation
    /// to deletion.
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            position,
            data: MessageData {
                text: DEFAULT_MESSAGE_TEXT.to_string(),
            },
        }
    }

    /// The editable text payload.
    pub fn text(&self) -> &str {
        &self.data.text
    }
}
