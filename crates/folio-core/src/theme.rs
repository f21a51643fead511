//! Light/dark theme preference
//!
//! [`ThemeController`] owns the active [`ThemePreference`]. The initial value
//! comes from the persisted preference, then the system signal, then light.
//! Every change is applied to the render surface and written through to the
//! store. Store failures are logged and otherwise ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::THEME_STORAGE_KEY;
use crate::store::PreferenceStore;

/// Display mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The other preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Render surface that consumes the active theme
pub trait ThemeSurface {
    fn apply_theme(&mut self, theme: ThemePreference);
}

/// System-level dark/light preference
pub trait SystemThemeSignal {
    /// The system preference, if the platform exposes one
    fn system_theme(&self) -> Option<ThemePreference>;
}

impl SystemThemeSignal for Option<ThemePreference> {
    fn system_theme(&self) -> Option<ThemePreference> {
        *self
    }
}

/// Where the initial preference came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

/// Owner of the active theme preference
pub struct ThemeController<S, T> {
    store: S,
    surface: T,
    current: ThemePreference,
}

impl<S: PreferenceStore, T: ThemeSurface> ThemeController<S, T> {
    /// Create an uninitialized controller holding the default preference
    pub fn new(store: S, surface: T) -> Self {
        Self {
            store,
            surface,
            current: ThemePreference::default(),
        }
    }

    /// Resolve, apply and persist the initial preference
    ///
    /// Call once, before the first frame is drawn.
    pub fn initialize(&mut self, system: &impl SystemThemeSignal) -> ThemeSource {
        let (theme, source) = match self.read_stored() {
            Some(theme) => (theme, ThemeSource::Stored),
            None => match system.system_theme() {
                Some(theme) => (theme, ThemeSource::System),
                None => (ThemePreference::default(), ThemeSource::Default),
            },
        };

        tracing::info!(%theme, ?source, "Initialized theme");
        self.set(theme);
        source
    }

    /// Flip the preference, apply it and persist it
    pub fn toggle(&mut self) -> ThemePreference {
        let theme = self.current.toggled();
        tracing::debug!(from = %self.current, to = %theme, "Toggling theme");
        self.set(theme);
        theme
    }

    /// The active preference
    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn set(&mut self, theme: ThemePreference) {
        self.current = theme;
        self.surface.apply_theme(theme);
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
    }

    fn read_stored(&self) -> Option<ThemePreference> {
        let value = match self.store.load(THEME_STORAGE_KEY) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                return None;
            }
        };

        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring stored theme preference: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};

    /// Surface that records every applied theme
    #[derive(Default)]
    struct RecordingSurface {
        applied: Vec<ThemePreference>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply_theme(&mut self, theme: ThemePreference) {
            self.applied.push(theme);
        }
    }

    /// Store that fails every operation
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }

        fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".into()))
        }
    }

    #[test]
    fn test_system_dark_without_stored_value() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingSurface::default());
        let source = controller.initialize(&Some(ThemePreference::Dark));

        assert_eq!(source, ThemeSource::System);
        assert_eq!(controller.current(), ThemePreference::Dark);
        assert_eq!(controller.surface().applied, vec![ThemePreference::Dark]);
        assert_eq!(
            controller.store().get(THEME_STORAGE_KEY),
            Some("dark")
        );
    }

    #[test]
    fn test_stored_value_wins_over_system() {
        let mut store = MemoryStore::new();
        store.save(THEME_STORAGE_KEY, "light").unwrap();
        let mut controller = ThemeController::new(store, RecordingSurface::default());

        assert_eq!(
            controller.initialize(&Some(ThemePreference::Dark)),
            ThemeSource::Stored
        );
        assert_eq!(controller.current(), ThemePreference::Light);
    }

    #[test]
    fn test_default_is_light() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingSurface::default());
        assert_eq!(controller.initialize(&None::<ThemePreference>), ThemeSource::Default);
        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(controller.store().get(THEME_STORAGE_KEY), Some("light"));
    }

    #[test]
    fn test_garbage_stored_value_falls_back() {
        let mut store = MemoryStore::new();
        store.save(THEME_STORAGE_KEY, "sepia").unwrap();
        let mut controller = ThemeController::new(store, RecordingSurface::default());

        assert_eq!(
            controller.initialize(&Some(ThemePreference::Dark)),
            ThemeSource::System
        );
        assert_eq!(controller.store().get(THEME_STORAGE_KEY), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut controller = ThemeController::new(MemoryStore::new(), RecordingSurface::default());
        controller.initialize(&Some(ThemePreference::Light));

        assert_eq!(controller.toggle(), ThemePreference::Dark);
        assert_eq!(controller.store().get(THEME_STORAGE_KEY), Some("dark"));
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.store().get(THEME_STORAGE_KEY), Some("light"));

        assert_eq!(
            controller.surface().applied,
            vec![
                ThemePreference::Light,
                ThemePreference::Dark,
                ThemePreference::Light
            ]
        );
        assert_eq!(controller.store().write_count(), 3);
    }

    #[test]
    fn test_broken_store_does_not_interrupt() {
        let mut controller = ThemeController::new(BrokenStore, RecordingSurface::default());
        assert_eq!(
            controller.initialize(&Some(ThemePreference::Dark)),
            ThemeSource::System
        );
        assert_eq!(controller.toggle(), ThemePreference::Light);
        assert_eq!(controller.current(), ThemePreference::Light);
        assert_eq!(controller.surface().applied.len(), 2);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("dark".parse(), Ok(ThemePreference::Dark));
        assert_eq!(" light\n".parse(), Ok(ThemePreference::Light));
        assert!("Dark".parse::<ThemePreference>().is_err());
    }
}
