use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError};

/// Store backed by a single JSON object file.
///
/// The file is read once on open; every `set` rewrites it whole.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl FileStore {
    pub const FILE_NAME: &'static str = "preferences.json";

    /// Open `<data_dir>/preferences.json`, creating nothing until the first write
    pub fn open_in(data_dir: &Path) -> Result<Self, StorageError> {
        Self::open(data_dir.join(Self::FILE_NAME))
    }

    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| unavailable(&path, e))?;
            if raw.trim().is_empty() {
                Map::new()
            } else {
                match serde_json::from_str::<Value>(&raw) {
                    Ok(Value::Object(map)) => map,
                    Ok(_) => {
                        return Err(StorageError::Unavailable(format!(
                            "{} does not contain a JSON object",
                            path.display()
                        )));
                    }
                    Err(e) => return Err(unavailable(&path, e)),
                }
            }
        } else {
            Map::new()
        };

        Ok(Self { path, entries })
    }

    /// Start from an empty object at `path`, discarding whatever is there
    /// on the first write
    pub fn reset(path: PathBuf) -> Self {
        Self {
            path,
            entries: Map::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(&self.path, e))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| unavailable(&self.path, e))?;
        std::fs::write(&self.path, content).map_err(|e| unavailable(&self.path, e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()));
        self.flush()
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> StorageError {
    StorageError::Unavailable(format!("{}: {}", path.display(), err))
}
