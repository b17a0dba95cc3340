//! File-backed key-value storage.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::{paths, KeyValueStorage};

/// Write-through key-value store backed by a single JSON object file.
///
/// Every `set`/`remove` rewrites the file immediately, mirroring the
/// synchronous persistence model the layout settings have always had. Write
/// failures are logged and otherwise swallowed; a corrupt storage file is
/// discarded and the store starts empty, consistent with the crate-wide
/// repair policy for bad persisted data.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (or initializes) the storage file at `path`.
    ///
    /// A missing file yields an empty store; unparsable contents are dropped
    /// with a warning. Only a genuine read failure is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(
                        "storage file {} is corrupt, starting empty: {err}",
                        path.display()
                    );
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Read { path, source }),
        };
        Ok(Self { path, entries })
    }

    /// Opens the storage file at the default platform location, creating the
    /// config directory if needed.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = paths::config_dir();
        paths::ensure_dir(&dir).map_err(|source| StorageError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Self::open(paths::storage_path())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the backing file from the in-memory entries. Best-effort.
    fn flush(&self) {
        let blob = match serde_json::to_string_pretty(&self.entries) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!("could not serialize storage entries: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, blob) {
            tracing::warn!("could not write storage file {}: {err}", self.path.display());
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
