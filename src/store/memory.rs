use std::sync::{Arc, RwLock};

use crate::error::StorageError;
use crate::flow::SavedFlow;

use super::FlowStore;

/// A volatile `FlowStore` keeping the saved-flow list in memory.
///
/// Intended for tests, demos and doctests; nothing survives the process.
/// Clones share the same underlying list, so a test can keep one handle
/// while the editor owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    flows: Arc<RwLock<Vec<SavedFlow>>>,
}

impl InMemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlowStore for InMemoryStore {
    fn load_all(&self) -> Vec<SavedFlow> {
        self.flows.read().expect("Lock poisoned").clone()
    }

    fn append(&self, flow: SavedFlow) -> Result<(), StorageError> {
        self.flows.write().expect("Lock poisoned").push(flow);
        Ok(())
    }
}
