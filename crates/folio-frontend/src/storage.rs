//! Platform preference storage
//!
//! Native builds persist to a RON file in the user's config directory.
//! Web builds persist to the browser's `localStorage`.

use folio_core::PreferenceStore;
#[cfg(target_arch = "wasm32")]
use folio_core::StoreError;

/// Preference store for the current platform
///
/// Falls back to an in-memory store when the platform store is unavailable,
/// so the theme still toggles but is not remembered.
pub fn platform_store() -> Box<dyn PreferenceStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        match folio_core::FileStore::in_config_dir() {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "Using preference file");
                Box::new(store)
            }
            Err(e) => {
                tracing::warn!("Preferences will not persist: {}", e);
                Box::new(folio_core::MemoryStore::new())
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorageStore::new() {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!("Preferences will not persist: {}", e);
                Box::new(folio_core::MemoryStore::new())
            }
        }
    }
}

/// Browser `localStorage`
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Io(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Io(format!("{:?}", e)))
    }
}
