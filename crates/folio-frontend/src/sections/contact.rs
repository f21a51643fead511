//! Contact section

use egui::{Align, Layout, RichText, Vec2};

use super::{PageContext, band, heading, primary_button, secondary_button};
use crate::state::{AppAction, SectionId};

pub fn show(ui: &mut egui::Ui, page: &mut PageContext) {
    let id = page.animations.section(SectionId::Contact);
    let palette = page.palette;
    let profile = &page.config.profile;
    let mut action = None;

    band(ui, page.is_scroll_target(SectionId::Contact), palette.bg_band, |ui| {
        page.presenter.animated(ui, id, |ui, _| {
            ui.vertical_centered(|ui| {
                heading(ui, "Get In Touch", &palette);
                ui.label(
                    RichText::new(
                        "I'm always open to new opportunities and collaborations. \
                         Feel free to reach out!",
                    )
                    .size(17.0)
                    .color(palette.text_secondary),
                );
                ui.add_space(24.0);

                ui.allocate_ui_with_layout(
                    Vec2::new(466.0, 40.0),
                    Layout::left_to_right(Align::Center),
                    |ui| {
                        if ui.add(primary_button("Email Me", &palette)).clicked() {
                            action = Some(AppAction::OpenUrl(profile.mailto()));
                        }
                        if ui.add(secondary_button("GitHub", &palette)).clicked() {
                            action = Some(AppAction::OpenUrl(profile.github.clone()));
                        }
                        if ui.add(secondary_button("LinkedIn", &palette)).clicked() {
                            action = Some(AppAction::OpenUrl(profile.linkedin.clone()));
                        }
                    },
                );
            });
        });
    });

    if let Some(action) = action {
        page.queue(action);
    }
}
