use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed connection between two node ids.
///
/// Field names follow the rendering collaborator's edge shape
/// (`source`/`target`), which is also the persisted wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl FlowEdge {
    /// Creates an edge with a fresh v4 UUID id.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}
