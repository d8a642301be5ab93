//! File-backed key-value store.
//!
//! Persists the whole key space as one JSON object in a single file, read
//! at open and rewritten on every set. A missing or unreadable file opens
//! as an empty store; the soft-failure policy for preference data applies
//! here as everywhere.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::persist::kv::{KeyValueStore, PersistError};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store, loading whatever the file currently holds. A
    /// missing file is a fresh store; a malformed one is warn-logged and
    /// treated as empty.
    pub fn open(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<HashMap<String, String>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "PREF_FILE_INVALID path={} error={}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                log::warn!("PREF_FILE_UNREADABLE path={} error={}", path.display(), e);
                HashMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    fn flush(&self) -> Result<(), PersistError> {
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        self.flush()
    }
}
