use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::flow::SavedFlow;

use super::{FlowStore, SAVED_FLOWS_KEY};

/// A `FlowStore` backed by one JSON document on disk.
///
/// The slot is the file `saved-flows.json` under the directory given to
/// `open`. Its content is the JSON array of stored flows, in exactly the
/// wire shape the rendering collaborator understands.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    slot: PathBuf,
}

impl JsonFileStore {
    /// Points the store at the saved-flows slot under `dir`. Nothing is
    /// touched on disk until the first append; a missing directory is
    /// created then.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            slot: dir.as_ref().join(format!("{}.json", SAVED_FLOWS_KEY)),
        }
    }

    /// The path of the slot file.
    pub fn slot_path(&self) -> &Path {
        &self.slot
    }
}

impl FlowStore for JsonFileStore {
    fn load_all(&self) -> Vec<SavedFlow> {
        let bytes = match fs::read(&self.slot) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(
                    slot = %self.slot.display(),
                    error = %err,
                    "Saved-flows slot could not be read, continuing with an empty list"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(flows) => flows,
            Err(err) => {
                tracing::warn!(
                    slot = %self.slot.display(),
                    error = %err,
                    "Saved-flows slot holds malformed JSON, continuing with an empty list"
                );
                Vec::new()
            }
        }
    }

    fn append(&self, flow: SavedFlow) -> Result<(), StorageError> {
        let mut flows = self.load_all();
        flows.push(flow);

        let bytes = serde_json::to_vec(&flows).map_err(|err| StorageError::EncodeFailed {
            reason: err.to_string(),
        })?;

        if let Some(parent) = self.slot.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| StorageError::WriteFailed {
                    slot: self.slot.display().to_string(),
                    reason: err.to_string(),
                })?;
            }
        }
        fs::write(&self.slot, bytes).map_err(|err| StorageError::WriteFailed {
            slot: self.slot.display().to_string(),
            reason: err.to_string(),
        })?;

        tracing::debug!(
            slot = %self.slot.display(),
            stored = flows.len(),
            "Saved-flows slot rewritten"
        );
        Ok(())
    }
}
