//! Key/value preference persistence

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Preference persistence errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// String key/value storage for user preferences
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// In-memory store, used when no platform storage exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Store backed by a RON map file
///
/// The whole map is rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's config directory (`<config>/folio/preferences.ron`)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_config_dir() -> Result<Self, StoreError> {
        use crate::constants::{APP_ID, PREFERENCES_FILE_NAME};

        let dir = dirs::config_dir()
            .ok_or_else(|| StoreError::Unavailable("no config directory".to_string()))?;
        Ok(Self::new(dir.join(APP_ID).join(PREFERENCES_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        ron::from_str(&content).map_err(|e| StoreError::Deserialize(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // Unreadable files are overwritten
        let mut values = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable preferences at {:?}: {}", self.path, e);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        let content = ron::ser::to_string_pretty(&values, ron::ser::PrettyConfig::default())
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, content).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(())
    }
}
