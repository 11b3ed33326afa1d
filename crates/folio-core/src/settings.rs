//! Persisted key-value preferences, the durable state behind the page.
//!
//! Components never touch storage directly; they hold a [`SettingsStore`] and
//! go through `get`/`set`. The store is injected at construction so tests can
//! swap in [`MemorySettings`] and the harness a [`JsonFileSettings`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::warn;

/// Injectable key-value store for page preferences
pub trait SettingsStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value, overwriting any previous one
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store; clones share the same underlying map
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().expect("settings lock").get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("settings lock")
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: a flat JSON object, written through on every `set`.
///
/// Read and parse problems degrade to an empty map; write problems are
/// logged. A broken settings file must never take the page down with it.
#[derive(Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileSettings {
    /// Open the store at `path`, loading any existing values
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_values(&path);
        Self { path, values }
    }

    fn read_values(path: &Path) -> HashMap<String, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring unreadable settings file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!("Failed to read settings file {}: {}", path.display(), e);
                HashMap::new()
            }
        }
    }

    fn write_values(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create settings dir {}: {}", parent.display(), e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.values) {
            Ok(content) => {
                if let Err(e) = std::fs::write(&self.path, content) {
                    warn!("Failed to write settings file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize settings: {}", e),
        }
    }
}

impl SettingsStore for JsonFileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.write_values();
    }
}
