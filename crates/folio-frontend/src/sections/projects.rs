//! Project grid with scroll-animated cards and the "Show more" button

use egui::emath::Rot2;
use egui::{
    Align, Align2, Color32, CornerRadius, FontId, Layout, Margin, RichText, Sense, Shadow, Shape,
    Stroke, Vec2,
};

use folio_core::{PresentationState, Project};

use super::{PageContext, band, heading, primary_button, secondary_button, shadow_blur};
use crate::state::{AppAction, SectionId};
use crate::theme::Palette;
use crate::theme::palette::{adjust, with_alpha};

/// Content width above which cards are laid out in two columns
const TWO_COLUMN_WIDTH: f32 = 640.0;

const THUMBNAIL_HEIGHT: f32 = 140.0;

pub fn show(ui: &mut egui::Ui, page: &mut PageContext) {
    let heading_id = page.animations.section(SectionId::Projects);
    let palette = page.palette;
    let projects = page.pager.visible_projects(&page.config.projects);
    let has_more = page.pager.has_more(page.config.projects.len());
    let card_ids: Vec<_> = projects
        .iter()
        .map(|project| page.animations.card(project.id))
        .collect();
    page.animations.retain_cards(projects.iter().map(|project| project.id));

    let mut actions = Vec::new();

    band(ui, page.is_scroll_target(SectionId::Projects), palette.bg_page, |ui| {
        page.presenter.animated(ui, heading_id, |ui, _| {
            heading(ui, "My Projects", &palette);
        });
        ui.add_space(8.0);

        let columns = if ui.available_width() >= TWO_COLUMN_WIDTH { 2 } else { 1 };
        ui.columns(columns, |cols| {
            for (index, (project, id)) in projects.iter().zip(&card_ids).enumerate() {
                let ui = &mut cols[index % columns];
                let action = page
                    .presenter
                    .animated(ui, *id, |ui, state| card(ui, project, state, &palette));
                actions.extend(action);
                ui.add_space(24.0);
            }
        });

        if has_more {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.add(primary_button("Show more", &palette)).clicked() {
                    actions.push(AppAction::ShowMoreProjects);
                }
            });
        }
    });

    for action in actions {
        let action = match action {
            AppAction::OpenUrl(url) => match page.asset(&url) {
                Some(resolved) => AppAction::OpenUrl(resolved),
                None => {
                    tracing::warn!(url = %url, "Project link is not available");
                    continue;
                }
            },
            other => other,
        };
        page.queue(action);
    }
}

/// One project card
///
/// `state` drives the parts of the card the presenter cannot: rotation turns
/// a tinted backdrop behind the card, blur widens the card shadow, and
/// brightness and saturation adjust the fill and accent colors.
fn card(
    ui: &mut egui::Ui,
    project: &Project,
    state: &PresentationState,
    palette: &Palette,
) -> Option<AppAction> {
    let fill = adjust(palette.bg_card, state.brightness, state.saturation);
    let accent = adjust(palette.accent, state.brightness, state.saturation);
    let backdrop = ui.painter().add(Shape::Noop);
    let mut action = None;

    let response = egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(CornerRadius::same(12))
        .shadow(Shadow {
            offset: [0, 6],
            blur: shadow_blur(10.0 + state.blur * 3.0),
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            thumbnail(ui, project, accent);
            ui.add_space(12.0);
            ui.label(
                RichText::new(&project.title)
                    .size(20.0)
                    .strong()
                    .color(palette.text_primary),
            );
            ui.label(RichText::new(&project.description).color(palette.text_secondary));
            ui.add_space(12.0);

            let button_palette = Palette { accent, ..*palette };
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                if ui.add(primary_button("Live Demo", &button_palette)).clicked() {
                    action = Some(AppAction::OpenUrl(project.live_demo.clone()));
                }
                if ui.add(secondary_button("GitHub", &button_palette)).clicked() {
                    action = Some(AppAction::OpenUrl(project.github.clone()));
                }
            });
        })
        .response;

    if state.rotation_deg.abs() > f32::EPSILON {
        let rect = response.rect.expand(6.0);
        let center = rect.center();
        let rotation = Rot2::from_angle(state.rotation_deg.to_radians());
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ]
        .map(|corner| center + rotation * (corner - center));
        ui.painter().set(
            backdrop,
            Shape::convex_polygon(corners.to_vec(), with_alpha(accent, 48), Stroke::NONE),
        );
    }

    action
}

/// Tinted banner standing in for the project screenshot
fn thumbnail(ui: &mut egui::Ui, project: &Project, accent: Color32) {
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), THUMBNAIL_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(8), with_alpha(accent, 60));

    let letter: String = project.title.chars().take(1).collect();
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        letter,
        FontId::proportional(56.0),
        accent,
    );
}
