//! Main application module

mod header;

use folio_core::{SharedAnimator, create_shared_animator};

use crate::actions::{ActionContext, dispatch_action};
use crate::animation::{PageAnimations, Presenter};
use crate::config::{SharedConfig, create_shared_config};
use crate::sections::{PageContext, show_page};
use crate::state::{SharedAppState, create_shared_state};
use crate::storage::platform_store;
use crate::theme::{Palette, ThemeBinding};

pub use header::render_header;

/// Main application
pub struct PortfolioApp {
    theme: ThemeBinding,
    config: SharedConfig,
    app_state: SharedAppState,
    animator: SharedAnimator,
    animations: PageAnimations,
    presenter: Presenter,
}

impl PortfolioApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();
        let (pager, animation) = {
            let config = config.read();
            (config.config().pagination, config.config().animation.clone())
        };

        // Resolved at the start of the first pass, once the system theme is known
        let theme = ThemeBinding::new(platform_store(), &cc.egui_ctx);

        let animator = create_shared_animator();
        let animations = PageAnimations::new(&animator, &animation);
        let presenter = Presenter::new(animator.clone(), animation.enabled);

        Self {
            theme,
            config,
            app_state: create_shared_state(pager),
            animator,
            animations,
            presenter,
        }
    }

    /// Process pending actions
    fn process_actions(&mut self) {
        let actions = self.app_state.lock().take_pending_actions();
        let mut ctx =
            ActionContext::new(&self.app_state, &self.config, self.theme.controller_mut());

        let mut config_changed = false;
        for action in actions {
            config_changed |= dispatch_action(action, &mut ctx).config_changed;
        }

        if config_changed {
            self.rebuild_animations();
        }
    }

    /// Re-register every animated element with the current tables
    fn rebuild_animations(&mut self) {
        let animation = self.config.read().config().animation.clone();
        self.animations = PageAnimations::new(&self.animator, &animation);
        self.presenter.reset();
        self.presenter.set_enabled(animation.enabled);
        tracing::debug!(
            tracked = self.animator.lock().len(),
            "Rebuilt scroll animations"
        );
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Before anything is drawn
        if let Some(source) = self.theme.begin_pass(ctx) {
            tracing::debug!(?source, "Resolved initial theme");
        }

        // Process pending actions
        self.process_actions();

        let Self {
            theme,
            config,
            app_state,
            animations,
            presenter,
            ..
        } = self;
        let config = config.read();
        let palette = Palette::for_theme(theme.current());

        render_header(
            ctx,
            app_state,
            &config.config().profile.name,
            theme.current(),
            config.path().is_some(),
        );

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.bg_page))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        presenter.begin_frame(ui.clip_rect());

                        let (pager, scroll_target) = {
                            let mut state = app_state.lock();
                            (state.pager, state.take_scroll_target())
                        };
                        let mut page = PageContext {
                            presenter: &mut *presenter,
                            animations: &mut *animations,
                            palette,
                            config: config.config(),
                            pager,
                            app_state,
                            asset_root: config.asset_root(),
                            scroll_target,
                        };
                        show_page(ui, &mut page);
                    });
            });

        // Sample once the whole page has been laid out
        presenter.end_frame(ctx);
    }
}
