//! Header bar with section navigation and the theme toggle

use egui::{Align, Layout, RichText};

use folio_core::ThemePreference;

use crate::state::{AppAction, SectionId, SharedAppState};
use crate::theme::Palette;

/// Render the header bar
pub fn render_header(
    ctx: &egui::Context,
    app_state: &SharedAppState,
    name: &str,
    theme: ThemePreference,
    can_reload: bool,
) {
    let palette = Palette::for_theme(theme);

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(palette.bg_card)
                .inner_margin(egui::Margin::symmetric(24, 10))
                .stroke(egui::Stroke::new(1.0, palette.border)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let title = RichText::new(name).size(20.0).strong().color(palette.accent);
                if ui.add(egui::Label::new(title).sense(egui::Sense::click())).clicked() {
                    queue(app_state, AppAction::ScrollTo(SectionId::Hero));
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let (icon, hint) = match theme {
                        ThemePreference::Dark => ("☀", "Switch to light mode"),
                        ThemePreference::Light => ("🌙", "Switch to dark mode"),
                    };
                    if ui
                        .button(RichText::new(icon).size(18.0))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        queue(app_state, AppAction::ToggleTheme);
                    }

                    if can_reload
                        && ui
                            .small_button("⟳")
                            .on_hover_text("Reload site configuration (F5)")
                            .clicked()
                    {
                        queue(app_state, AppAction::ReloadConfig);
                    }

                    ui.add_space(12.0);
                    for section in SectionId::ALL.into_iter().skip(1).rev() {
                        if ui
                            .add(egui::Button::new(section.label()).frame(false))
                            .clicked()
                        {
                            queue(app_state, AppAction::ScrollTo(section));
                        }
                    }
                });
            });
        });

    if can_reload && ctx.input(|i| i.key_pressed(egui::Key::F5)) {
        queue(app_state, AppAction::ReloadConfig);
    }
}

fn queue(app_state: &SharedAppState, action: AppAction) {
    app_state.lock().queue_action(action);
}
