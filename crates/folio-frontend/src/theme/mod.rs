//! Theme module for UI styling
//!
//! Bridges the core [`ThemeController`](folio_core::ThemeController) to egui:
//! [`EguiThemeSurface`] installs the visuals for the active preference,
//! [`EguiSystemTheme`] reads the platform dark/light signal and
//! [`ThemeBinding`] resolves the initial preference on the first pass.

mod dark;
mod light;
pub mod palette;

use folio_core::{
    PreferenceStore, SystemThemeSignal, ThemeController, ThemePreference, ThemeSource,
    ThemeSurface,
};

pub use palette::Palette;

/// Theme controller used by the application
pub type AppThemeController = ThemeController<Box<dyn PreferenceStore>, EguiThemeSurface>;

/// Apply the given preference to the egui context
pub fn apply_theme(ctx: &egui::Context, theme: ThemePreference) {
    ctx.set_visuals_of(egui::Theme::Dark, dark::visuals());
    ctx.set_visuals_of(egui::Theme::Light, light::visuals());
    ctx.set_theme(to_egui(theme));
}

fn to_egui(theme: ThemePreference) -> egui::Theme {
    match theme {
        ThemePreference::Dark => egui::Theme::Dark,
        ThemePreference::Light => egui::Theme::Light,
    }
}

fn from_egui(theme: egui::Theme) -> ThemePreference {
    match theme {
        egui::Theme::Dark => ThemePreference::Dark,
        egui::Theme::Light => ThemePreference::Light,
    }
}

/// Render surface backed by an egui context
#[derive(Clone)]
pub struct EguiThemeSurface {
    ctx: egui::Context,
}

impl EguiThemeSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ThemeSurface for EguiThemeSurface {
    fn apply_theme(&mut self, theme: ThemePreference) {
        apply_theme(&self.ctx, theme);
        self.ctx.request_repaint();
    }
}

/// System dark/light preference as reported by the integration
pub struct EguiSystemTheme(Option<egui::Theme>);

impl EguiSystemTheme {
    pub fn from_context(ctx: &egui::Context) -> Self {
        Self(ctx.system_theme())
    }
}

impl SystemThemeSignal for EguiSystemTheme {
    fn system_theme(&self) -> Option<ThemePreference> {
        self.0.map(from_egui)
    }
}

/// Theme controller bound to an egui context
///
/// The integration reports the system theme only once a pass has begun, so
/// the initial preference is resolved at the start of the first pass, before
/// anything is drawn.
pub struct ThemeBinding<S = Box<dyn PreferenceStore>> {
    controller: ThemeController<S, EguiThemeSurface>,
    initialized: bool,
}

impl<S: PreferenceStore> ThemeBinding<S> {
    pub fn new(store: S, ctx: &egui::Context) -> Self {
        Self {
            controller: ThemeController::new(store, EguiThemeSurface::new(ctx.clone())),
            initialized: false,
        }
    }

    /// Resolve the initial preference on the first call; later calls do nothing
    pub fn begin_pass(&mut self, ctx: &egui::Context) -> Option<ThemeSource> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        Some(self.controller.initialize(&EguiSystemTheme::from_context(ctx)))
    }

    pub fn current(&self) -> ThemePreference {
        self.controller.current()
    }

    pub fn controller(&self) -> &ThemeController<S, EguiThemeSurface> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ThemeController<S, EguiThemeSurface> {
        &mut self.controller
    }
}
