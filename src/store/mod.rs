pub mod file;
pub mod memory;

pub use file::*;
pub use memory::*;

use crate::error::StorageError;
use crate::flow::SavedFlow;

/// The fixed key naming the single storage slot holding the saved-flow list.
pub const SAVED_FLOWS_KEY: &str = "saved-flows";

/// A durable, append-only list of saved flows behind a single storage slot.
///
/// This is the only surface through which the editor reaches persistence. A
/// store is injected once at construction and nothing else touches the slot.
///
/// Reading is infallible by contract: an absent slot is an empty list, and a
/// corrupt slot is recovered as empty (with a logged diagnostic) rather than
/// failing the session. Writing reports failure so a save is never silently
/// dropped.
pub trait FlowStore: Send + Sync {
    /// Returns every stored flow in save order. Never fails: absent or
    /// unreadable data yields an empty list.
    fn load_all(&self) -> Vec<SavedFlow>;

    /// Appends one flow to the stored list, rewriting the whole slot.
    ///
    /// The read-modify-write is not transactional across writers; the
    /// design assumes a single logical writer per slot.
    fn append(&self, flow: SavedFlow) -> Result<(), StorageError>;
}
