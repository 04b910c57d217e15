//! # Nagare - Message Flow Graph Model and Persistence Engine
//!
//! **Nagare** is the data model behind a visual builder for chatbot message flows. It owns
//! the working graph of message nodes and directed connections, enforces the structural
//! rules a deployable flow must satisfy, and persists named snapshots of the graph as
//! plain JSON. Rendering is someone else's job: a canvas layer feeds interaction intents
//! in and reads the containers back out after every change.
//!
//! ## Core Workflow
//!
//! The engine is renderer-agnostic. It operates on a canonical model of a "flow" and a
//! single orchestration type, the `FlowEditor`. The primary workflow is:
//!
//! 1.  **Open an Editor**: Construct a `FlowEditor` over a store, either the durable `JsonFileStore` or the volatile `InMemoryStore`.
//! 2.  **Feed Intents**: Forward each canvas gesture as it happens: `dropped`, `connected`, `nodes_changed`, `edges_changed`, `node_clicked`.
//! 3.  **Save**: Call `try_save` with a name prompt. The graph is validated first; only a structurally sound, named flow reaches the store.
//! 4.  **Load**: Pick a record from `saved_flows` and hand it to `load_flow` to replace the working graph wholesale.
//!
//! ## Quick Start
//!
//! The following example demonstrates the end-to-end process.
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. An editor over an injected store.
//!     let mut editor = FlowEditor::new(InMemoryStore::new());
//!
//!     // 2. Intents, exactly as the canvas would deliver them.
//!     let greet = editor.dropped(NodeKind::Message, Position::new(80.0, 40.0));
//!     let follow = editor.dropped(NodeKind::Message, Position::new(80.0, 180.0));
//!     editor.set_node_text(&greet.id, "Hi there!");
//!     editor.set_node_text(&follow.id, "How can I help?");
//!     editor.connected(&greet.id, &follow.id);
//!
//!     // 3. Validate and persist under a user-supplied name.
//!     match editor.try_save(|| Some("Welcome flow".to_string()))? {
//!         SaveOutcome::Saved(flow) => {
//!             println!("Saved '{}' with {} nodes", flow.name, flow.nodes.len())
//!         }
//!         SaveOutcome::Cancelled => println!("Save cancelled"),
//!     }
//!
//!     // 4. Later: list the stored flows and load one back.
//!     let stored = editor.saved_flows();
//!     editor.load_flow(&stored[0]);
//!     assert_eq!(editor.nodes().len(), 2);
//!
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod flow;
pub mod prelude;
pub mod store;
pub mod validate;
