//! Light theme visuals for egui

use egui::{Color32, CornerRadius, Shadow, Stroke, Visuals};

use super::palette::{self, light};

/// Create light theme visuals
pub fn visuals() -> Visuals {
    let mut v = Visuals::light();

    v.panel_fill = light::BG_PAGE;
    v.window_fill = light::BG_CARD;
    v.extreme_bg_color = light::BG_CARD;
    v.faint_bg_color = light::BG_BAND;

    v.selection.bg_fill = palette::with_alpha(light::ACCENT, 60);
    v.selection.stroke = Stroke::new(1.0, light::ACCENT);

    v.hyperlink_color = light::ACCENT;
    v.override_text_color = Some(light::TEXT_PRIMARY);

    v.widgets.noninteractive.bg_fill = light::BG_CARD;
    v.widgets.noninteractive.weak_bg_fill = light::BG_BAND;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, light::BORDER);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, light::TEXT_SECONDARY);
    v.widgets.noninteractive.corner_radius = CornerRadius::same(8);

    v.widgets.inactive.bg_fill = light::BG_CHIP;
    v.widgets.inactive.weak_bg_fill = light::BG_CHIP;
    v.widgets.inactive.bg_stroke = Stroke::NONE;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, light::TEXT_PRIMARY);
    v.widgets.inactive.corner_radius = CornerRadius::same(8);

    v.widgets.hovered.bg_fill = light::ACCENT_HOVER;
    v.widgets.hovered.weak_bg_fill = light::BG_BAND;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, light::ACCENT);
    v.widgets.hovered.fg_stroke = Stroke::new(1.5, light::TEXT_PRIMARY);
    v.widgets.hovered.corner_radius = CornerRadius::same(8);

    v.widgets.active.bg_fill = light::ACCENT;
    v.widgets.active.weak_bg_fill = light::BG_BAND;
    v.widgets.active.bg_stroke = Stroke::new(1.0, light::ACCENT);
    v.widgets.active.fg_stroke = Stroke::new(2.0, light::TEXT_PRIMARY);
    v.widgets.active.corner_radius = CornerRadius::same(8);

    v.window_corner_radius = CornerRadius::same(12);
    v.window_shadow = Shadow {
        offset: [0, 8],
        blur: 24,
        spread: 0,
        color: Color32::from_black_alpha(40),
    };
    v.window_stroke = Stroke::new(1.0, light::BORDER);

    v.popup_shadow = Shadow {
        offset: [0, 2],
        blur: 8,
        spread: 0,
        color: Color32::from_black_alpha(25),
    };

    v.text_cursor.stroke = Stroke::new(2.0, light::TEXT_PRIMARY);

    v
}
