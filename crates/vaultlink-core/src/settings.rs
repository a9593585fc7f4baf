//! Persistent settings store collaborator.
//!
//! The desktop application kept a small JSON key/value settings file (last
//! selected vault path, recent links). [`SettingsStore`] is that contract;
//! [`JsonFileStore`] is the file-backed implementation and [`MemoryStore`] the
//! in-memory one used by tests and headless callers.

use crate::error::{Error, Result};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Settings key for the last selected vault path.
pub const KEY_VAULT_PATH: &str = "vaultPath";
/// Settings key for the capped recent-links list.
pub const KEY_RECENT_LINKS: &str = "recentLinks";

/// Key/value persistence contract consumed by the core.
///
/// Values are raw JSON so the store stays schema-agnostic; typed access goes
/// through [`get_as`] / [`set_as`].
pub trait SettingsStore: Send + Sync {
    /// Fetch a value, or `None` when the key was never set.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value under a key, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<()>;
}

/// Typed read from a store. Missing keys and undeserializable values both map
/// to `None`; a stale value shape is not worth failing a whole operation over.
pub fn get_as<T: serde::de::DeserializeOwned>(store: &dyn SettingsStore, key: &str) -> Option<T> {
    let value = store.get(key)?;
    match serde_json::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("Ignoring malformed settings value for '{}': {}", key, e);
            None
        }
    }
}

/// Typed write to a store.
pub fn set_as<T: serde::Serialize>(store: &dyn SettingsStore, key: &str, value: &T) -> Result<()> {
    let value = serde_json::to_value(value)
        .map_err(|e| Error::settings_error(format!("Failed to serialize '{}': {}", key, e)))?;
    store.set(key, value)
}

/// In-memory settings store for tests and headless use.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed settings store: one pretty-printed JSON object per file,
/// loaded at construction, rewritten on every `set`.
pub struct JsonFileStore {
    path: PathBuf,
    values: RwLock<Map<String, Value>>,
}

impl JsonFileStore {
    /// Open (or initialize) a store at the given file path. A missing file is
    /// an empty store; an unreadable or malformed file is reset to empty with
    /// a warning rather than refusing to start.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Map<String, Value>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!(
                        "Settings file {} is malformed ({}); starting empty",
                        path.display(),
                        e
                    );
                    Map::new()
                }
            },
            Err(_) => Map::new(),
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    /// Conventional settings location: `<config dir>/vaultlink/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("vaultlink").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::settings_error(format!(
                    "Failed to create settings directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let content = serde_json::to_string_pretty(values)
            .map_err(|e| Error::settings_error(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&self.path, content).map_err(|e| {
            Error::settings_error(format!(
                "Failed to write settings file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value);
        self.persist(&values)
    }
}
