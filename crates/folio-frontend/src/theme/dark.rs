//! Dark theme visuals for egui

use egui::{Color32, CornerRadius, Shadow, Stroke, Visuals};

use super::palette;

/// Create dark theme visuals
pub fn visuals() -> Visuals {
    let mut v = Visuals::dark();

    // Background colors
    v.panel_fill = palette::BG_PAGE;
    v.window_fill = palette::BG_CARD;
    v.extreme_bg_color = palette::BG_PAGE;
    v.faint_bg_color = palette::BG_BAND;

    // Selection
    v.selection.bg_fill = palette::with_alpha(palette::ACCENT, 80);
    v.selection.stroke = Stroke::new(1.0, palette::ACCENT);

    // Hyperlink
    v.hyperlink_color = palette::ACCENT;

    // Text colors
    v.override_text_color = Some(palette::TEXT_PRIMARY);

    // Widget colors
    v.widgets.noninteractive.bg_fill = palette::BG_CARD;
    v.widgets.noninteractive.weak_bg_fill = palette::BG_BAND;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette::BORDER);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette::TEXT_SECONDARY);
    v.widgets.noninteractive.corner_radius = CornerRadius::same(8);

    v.widgets.inactive.bg_fill = palette::BG_CHIP;
    v.widgets.inactive.weak_bg_fill = palette::BG_CHIP;
    v.widgets.inactive.bg_stroke = Stroke::NONE;
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, palette::TEXT_PRIMARY);
    v.widgets.inactive.corner_radius = CornerRadius::same(8);

    v.widgets.hovered.bg_fill = palette::ACCENT_HOVER;
    v.widgets.hovered.weak_bg_fill = palette::BG_CHIP;
    v.widgets.hovered.bg_stroke = Stroke::new(1.0, palette::ACCENT);
    v.widgets.hovered.fg_stroke = Stroke::new(1.5, palette::TEXT_PRIMARY);
    v.widgets.hovered.corner_radius = CornerRadius::same(8);

    v.widgets.active.bg_fill = palette::ACCENT;
    v.widgets.active.weak_bg_fill = palette::BG_CHIP;
    v.widgets.active.bg_stroke = Stroke::new(1.0, palette::ACCENT);
    v.widgets.active.fg_stroke = Stroke::new(2.0, palette::TEXT_PRIMARY);
    v.widgets.active.corner_radius = CornerRadius::same(8);

    // Window styling
    v.window_corner_radius = CornerRadius::same(12);
    v.window_shadow = Shadow {
        offset: [0, 8],
        blur: 24,
        spread: 0,
        color: Color32::from_black_alpha(110),
    };
    v.window_stroke = Stroke::new(1.0, palette::BORDER);

    // Popup styling
    v.popup_shadow = Shadow {
        offset: [0, 2],
        blur: 8,
        spread: 0,
        color: Color32::from_black_alpha(60),
    };

    // Text cursor
    v.text_cursor.stroke = Stroke::new(2.0, palette::TEXT_PRIMARY);

    v
}
