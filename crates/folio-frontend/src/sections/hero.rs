//! Hero banner: avatar, name, tagline and the two calls to action

use egui::{
    Align, Align2, Color32, CornerRadius, FontId, Layout, RichText, Sense, Shadow, Stroke, Vec2,
};

use super::{PageContext, band, primary_button, secondary_button, shadow_blur};
use crate::state::{AppAction, SectionId};
use crate::theme::Palette;

const AVATAR_RADIUS: f32 = 72.0;

pub fn show(ui: &mut egui::Ui, page: &mut PageContext) {
    let id = page.animations.hero();
    let palette = page.palette;
    let profile = &page.config.profile;
    let resume = page.asset(&profile.resume);
    let mut action = None;

    band(ui, page.is_scroll_target(SectionId::Hero), palette.bg_band, |ui| {
        page.presenter.animated(ui, id, |ui, state| {
            ui.vertical_centered(|ui| {
                avatar(ui, &profile.initials(), &palette, state.blur);
                ui.add_space(24.0);
                ui.label(
                    RichText::new(&profile.name)
                        .size(44.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(&profile.tagline)
                        .size(20.0)
                        .color(palette.text_secondary),
                );
                ui.add_space(24.0);

                let row_width = if resume.is_some() { 308.0 } else { 150.0 };
                ui.allocate_ui_with_layout(
                    Vec2::new(row_width, 40.0),
                    Layout::left_to_right(Align::Center),
                    |ui| {
                        if ui.add(primary_button("View My Projects", &palette)).clicked() {
                            action = Some(AppAction::ScrollTo(SectionId::Projects));
                        }
                        if let Some(resume) = &resume {
                            if ui.add(secondary_button("View Resume", &palette)).clicked() {
                                action = Some(AppAction::OpenUrl(resume.clone()));
                            }
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

/// Round portrait placeholder showing the owner's initials
fn avatar(ui: &mut egui::Ui, initials: &str, palette: &Palette, blur: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(AVATAR_RADIUS * 2.0), Sense::hover());
    let painter = ui.painter();

    let shadow = Shadow {
        offset: [0, 8],
        blur: shadow_blur(16.0 + blur * 2.0),
        spread: 0,
        color: Color32::from_black_alpha(70),
    };
    painter.add(shadow.as_shape(rect, CornerRadius::same(AVATAR_RADIUS as u8)));
    painter.circle(
        rect.center(),
        AVATAR_RADIUS,
        palette.accent,
        Stroke::new(4.0, palette.bg_card),
    );
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initials,
        FontId::proportional(48.0),
        palette.on_accent,
    );
}
