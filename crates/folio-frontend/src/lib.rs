//! Folio frontend
//!
//! eframe application rendering the portfolio page, for native and web.

pub mod actions;
pub mod animation;
pub mod app;
pub mod config;
pub mod links;
pub mod sections;
pub mod state;
pub mod storage;
pub mod theme;

// Re-exports for convenience
pub use app::PortfolioApp;
pub use config::{ConfigManager, SharedConfig};
pub use state::{AppAction, AppState, SharedAppState};
