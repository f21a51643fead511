//! About section with the skill chips

use egui::{CornerRadius, Margin, RichText};

use super::{PageContext, band, heading};
use crate::state::SectionId;

pub fn show(ui: &mut egui::Ui, page: &mut PageContext) {
    let id = page.animations.section(SectionId::About);
    let palette = page.palette;
    let profile = &page.config.profile;

    band(ui, page.is_scroll_target(SectionId::About), palette.bg_page, |ui| {
        page.presenter.animated(ui, id, |ui, _| {
            heading(ui, "About Me", &palette);
            ui.label(
                RichText::new(&profile.about)
                    .size(17.0)
                    .color(palette.text_secondary),
            );

            if profile.skills.is_empty() {
                return;
            }

            ui.add_space(24.0);
            ui.label(
                RichText::new("Skills")
                    .size(20.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                for skill in &profile.skills {
                    egui::Frame::new()
                        .fill(palette.bg_chip)
                        .corner_radius(CornerRadius::same(16))
                        .inner_margin(Margin::symmetric(12, 6))
                        .show(ui, |ui| {
                            ui.label(RichText::new(skill).color(palette.text_primary));
                        });
                }
            });
        });
    });
}
