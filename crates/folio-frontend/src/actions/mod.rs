//! Action handling module
//!
//! Widgets queue [`AppAction`]s on the shared state while drawing; the app
//! drains and dispatches them at the start of the next frame.

use crate::config::SharedConfig;
use crate::links;
use crate::state::{AppAction, SharedAppState};
use crate::theme::AppThemeController;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub app_state: &'a SharedAppState,
    pub config: &'a SharedConfig,
    pub theme: &'a mut AppThemeController,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        app_state: &'a SharedAppState,
        config: &'a SharedConfig,
        theme: &'a mut AppThemeController,
    ) -> Self {
        Self {
            app_state,
            config,
            theme,
        }
    }
}

/// What the app must redo after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionEffects {
    /// Configuration changed; animation registrations must be rebuilt
    pub config_changed: bool,
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: AppAction, ctx: &mut ActionContext) -> ActionEffects {
    let mut effects = ActionEffects::default();

    match action {
        AppAction::ToggleTheme => {
            ctx.theme.toggle();
        }

        AppAction::ShowMoreProjects => {
            let total = ctx.config.read().config().projects.len();
            let mut state = ctx.app_state.lock();
            state.pager.show_more(total);
            tracing::debug!(visible = state.pager.visible, total, "Showing more projects");
        }

        AppAction::ScrollTo(section) => {
            ctx.app_state.lock().scroll_target = Some(section);
        }

        AppAction::OpenUrl(url) => {
            links::open_url(&url);
        }

        AppAction::ReloadConfig => {
            let result = ctx.config.write().reload();
            match result {
                Ok(()) => {
                    let pager = ctx.config.read().config().pagination;
                    ctx.app_state.lock().pager = pager;
                    effects.config_changed = true;
                }
                Err(e) => tracing::error!("Failed to reload configuration: {}", e),
            }
        }
    }

    effects
}
