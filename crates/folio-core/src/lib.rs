//! Folio core
//!
//! GUI-independent logic for the portfolio: the light/dark theme controller
//! with its preference stores, and the scroll-linked animator (progress
//! normalization, piecewise-linear curves, presentation state derivation).

pub mod animator;
pub mod config;
pub mod constants;
pub mod content;
pub mod curve;
pub mod presentation;
pub mod progress;
pub mod store;
pub mod theme;

// Re-exports for convenience
pub use animator::{
    ElementId, Layout, PresentationSink, ScrollAnimator, SharedAnimator, TrackHandle,
    create_shared_animator, track_shared,
};
pub use config::{AnimationConfig, ConfigError, ElementAnimation, SiteConfig};
pub use content::{Profile, Project, ProjectPager};
pub use curve::{AnimationCurve, ControlPoint, CurveError, evaluate};
pub use presentation::{CurveSet, Parameter, PresentationState};
pub use progress::{Edge, Intersection, OffsetParseError, ScrollOffsets, ScrollProgress, Span};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError};
pub use theme::{
    SystemThemeSignal, ThemeController, ThemePreference, ThemeSource, ThemeSurface, UnknownTheme,
};
