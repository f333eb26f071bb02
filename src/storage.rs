//! Key-value persistence of the session so it survives a restart.
//!
//! Storage is optional: a missing key means first-run defaults, and a failed
//! read or write is logged and skipped.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage keys.
pub const KEY_CONFIG: &str = "config";
pub const KEY_BRACKET: &str = "bracket";
pub const KEY_SCORES: &str = "scores";
pub const KEY_CURSOR: &str = "cursor";
pub const KEY_OUTCOME: &str = "outcome";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageError {
    Io(String),
    Serde(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            StorageError::Serde(msg) => write!(f, "storage format error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// JSON values by string key.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn put(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

/// In-process store (tests, or running without a data directory).
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`. The directory is created on first write.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(format!("read {}: {e}", path.display()))),
        };
        serde_json::from_str(&data)
            .map(Some)
            .map_err(|e| StorageError::Serde(format!("parse {}: {e}", path.display())))
    }

    fn put(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::Io(format!("create {}: {e}", self.dir.display())))?;
        let path = self.path_for(key);
        let payload =
            serde_json::to_string_pretty(&value).map_err(|e| StorageError::Serde(e.to_string()))?;
        fs::write(&path, payload)
            .map_err(|e| StorageError::Io(format!("write {}: {e}", path.display())))
    }
}

/// Read and decode `key`. Absent, unreadable or undecodable values give None;
/// the latter two are logged.
pub fn load<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Option<T> {
    let value = match store.get(key) {
        Ok(value) => value?,
        Err(e) => {
            log::warn!("Could not load {:?}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log::warn!("Discarding stored {:?}: {}", key, e);
            None
        }
    }
}

/// Encode and write `value` under `key`. Failures are logged, never returned.
pub fn save<T: Serialize>(store: &mut dyn SessionStore, key: &str, value: &T) {
    let result = serde_json::to_value(value)
        .map_err(|e| StorageError::Serde(e.to_string()))
        .and_then(|v| store.put(key, v));
    if let Err(e) = result {
        log::warn!("Could not persist {:?}: {}", key, e);
    }
}
