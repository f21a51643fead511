//! Global constants for folio-core

/// Preference key holding the persisted theme ("light" or "dark")
pub const THEME_STORAGE_KEY: &str = "theme";

/// Application id, used for the native config directory name
pub const APP_ID: &str = "folio";

/// File name of the native preference store inside the config directory
pub const PREFERENCES_FILE_NAME: &str = "preferences.ron";

/// Number of project cards shown before "Show more" is pressed
pub const DEFAULT_VISIBLE_PROJECTS: usize = 4;

/// Number of project cards revealed by each "Show more"
pub const DEFAULT_PROJECT_STEP: usize = 2;
