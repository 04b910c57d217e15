//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the nagare crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust
//! // Use the prelude to get easy access to all the core types.
//! use nagare::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Build a small flow through editor intents
//! let mut editor = FlowEditor::new(InMemoryStore::new());
//! let node = editor.dropped(NodeKind::Message, Position::new(40.0, 40.0));
//! editor.set_node_text(&node.id, "Welcome!");
//!
//! // Validate and persist it under a user-supplied name
//! if let SaveOutcome::Saved(flow) = editor.try_save(|| Some("Greeting".to_string()))? {
//!     println!("Stored flow '{}' ({})", flow.name, flow.id);
//! }
//! # Ok(())
//! # }
//! ```

// Editing session and orchestration
pub use crate::editor::{FlowEditor, SaveOutcome};

// Graph model types
pub use crate::flow::{
    DEFAULT_MESSAGE_TEXT, EdgeChange, FlowEdge, FlowGraph, FlowNode, MessageData, NodeChange,
    NodeKind, Position, SavedFlow,
};

// Save-time validation
pub use crate::validate::validate;

// Persistence
pub use crate::store::{FlowStore, InMemoryStore, JsonFileStore, SAVED_FLOWS_KEY};

// Error types
pub use crate::error::{SaveError, StorageError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
