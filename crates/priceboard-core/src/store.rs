//! Snapshot persistence: tolerant load, atomic save.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Snapshot;
use crate::error::StoreError;

/// Reads and writes the canonical JSON snapshot artifact.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the prior run's snapshot.
    ///
    /// A missing file and a file that fails to parse both collapse to
    /// `None`: first-run and corrupted-cache behavior are deliberately
    /// identical, and both fall back to baseline/placeholder data.
    /// Corruption is surfaced as a warning only.
    pub fn load(&self) -> Option<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                log::warn!("snapshot at {} is unreadable: {error}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                log::warn!(
                    "snapshot at {} failed to parse: {error}",
                    self.path.display()
                );
                None
            }
        }
    }

    /// Write the complete snapshot, replacing the prior artifact.
    ///
    /// The document is staged in a sibling temp file and renamed into
    /// place, so a reader only ever observes the previous complete
    /// artifact or the new complete artifact.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let body = serde_json::to_string_pretty(snapshot)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, body)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
