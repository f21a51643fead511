//! Site configuration management
//!
//! The embedded `assets/site.ron` is always available. Native builds may
//! point `FOLIO_CONFIG` at another RON file; a file that fails to load is
//! logged and the embedded configuration is used instead.
//!
//! Relative asset paths resolve next to the override file, or next to the
//! executable when the embedded configuration is in use.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use folio_core::{ConfigError, SiteConfig};

/// Environment variable naming an override configuration file
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

const EMBEDDED_CONFIG: &str = include_str!("../../../assets/site.ron");

/// Holder of the active site configuration
#[derive(Debug)]
pub struct ConfigManager {
    config: SiteConfig,
    path: Option<PathBuf>,
    asset_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Load the override file if one is configured, else the embedded default
    pub fn load() -> Self {
        let path = override_path();
        let config = match &path {
            Some(path) => Self::load_file(path),
            None => Self::embedded(),
        };
        Self::new(config, path)
    }

    /// Manager over an explicit file
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = Self::load_file(&path);
        Self::new(config, Some(path))
    }

    fn new(config: SiteConfig, path: Option<PathBuf>) -> Self {
        let asset_root = match &path {
            Some(path) => path.parent().map(Path::to_path_buf),
            None => executable_dir(),
        };
        Self {
            config,
            path,
            asset_root,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Override file in use, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory that relative asset paths resolve against
    pub fn asset_root(&self) -> Option<&Path> {
        self.asset_root.as_deref()
    }

    /// Re-read the override file
    ///
    /// On error the current configuration is kept.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        self.config = SiteConfig::load(path)?;
        tracing::info!(path = %path.display(), "Reloaded site configuration");
        Ok(())
    }

    fn load_file(path: &Path) -> SiteConfig {
        match SiteConfig::load(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded site configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to load site configuration: {}", e);
                Self::embedded()
            }
        }
    }

    fn embedded() -> SiteConfig {
        match SiteConfig::load_from_bytes(EMBEDDED_CONFIG.as_bytes()) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Embedded site configuration is invalid: {}", e);
                SiteConfig {
                    profile: folio_core::Profile::default(),
                    projects: Vec::new(),
                    pagination: Default::default(),
                    animation: Default::default(),
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn override_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(target_arch = "wasm32")]
fn override_path() -> Option<PathBuf> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn executable_dir() -> Option<PathBuf> {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(Path::to_path_buf),
        Err(e) => {
            tracing::warn!("Failed to locate executable: {}", e);
            None
        }
    }
}

// Assets are served by the host page
#[cfg(target_arch = "wasm32")]
fn executable_dir() -> Option<PathBuf> {
    None
}

pub type SharedConfig = Arc<RwLock<ConfigManager>>;

/// Create a shared config manager
pub fn create_shared_config() -> SharedConfig {
    Arc::new(RwLock::new(ConfigManager::load()))
}
