//! Page sections, drawn top to bottom inside the page scroll area

mod about;
mod contact;
mod hero;
mod projects;

use std::path::Path;

use egui::{Align, Rect, UiBuilder, Vec2};

use folio_core::{ProjectPager, SiteConfig};

use crate::animation::{PageAnimations, Presenter};
use crate::state::{AppAction, SectionId, SharedAppState};
use crate::theme::Palette;

/// Maximum width of the centred content column
const CONTENT_WIDTH: f32 = 960.0;

/// Vertical padding of each section band
const SECTION_PADDING: f32 = 64.0;

/// Everything a section needs to draw itself for one frame
pub struct PageContext<'a> {
    pub presenter: &'a mut Presenter,
    pub animations: &'a mut PageAnimations,
    pub palette: Palette,
    pub config: &'a SiteConfig,
    pub pager: ProjectPager,
    pub app_state: &'a SharedAppState,
    /// Directory that relative asset paths resolve against
    pub asset_root: Option<&'a Path>,
    /// Section to bring into view this frame
    pub scroll_target: Option<SectionId>,
}

impl PageContext<'_> {
    pub fn is_scroll_target(&self, section: SectionId) -> bool {
        self.scroll_target == Some(section)
    }

    pub fn queue(&self, action: AppAction) {
        self.app_state.lock().queue_action(action);
    }

    /// Resolved asset link, `None` when the file is not available
    pub fn asset(&self, path: &str) -> Option<String> {
        crate::links::resolve_asset(path, self.asset_root)
    }
}

/// Draw the whole page
pub fn show_page(ui: &mut egui::Ui, page: &mut PageContext) {
    ui.spacing_mut().item_spacing.y = 0.0;

    hero::show(ui, page);
    about::show(ui, page);
    projects::show(ui, page);
    contact::show(ui, page);
}

/// Full-width band with a centred content column
///
/// With `scroll_here` set the band is scrolled to the top of the viewport.
fn band<R>(
    ui: &mut egui::Ui,
    scroll_here: bool,
    fill: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let inner = egui::Frame::new().fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.add_space(SECTION_PADDING);
        let inner = centered_column(ui, add_contents);
        ui.add_space(SECTION_PADDING);
        inner
    });

    if scroll_here {
        ui.scroll_to_rect(inner.response.rect, Some(Align::TOP));
    }

    inner.inner
}

fn centered_column<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let available = ui.available_width();
    let width = available.min(CONTENT_WIDTH) - 48.0;
    let min = ui.cursor().min + Vec2::new((available - width) * 0.5, 0.0);
    let rect = Rect::from_min_size(min, Vec2::new(width.max(0.0), ui.available_height()));

    ui.scope_builder(
        UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(Align::Min)),
        |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;
            add_contents(ui)
        },
    )
    .inner
}

/// Section heading in the shared style
fn heading(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    ui.label(
        egui::RichText::new(text)
            .size(30.0)
            .strong()
            .color(palette.text_primary),
    );
    ui.add_space(16.0);
}

/// Shadow blur radius in egui's integer units
fn shadow_blur(radius: f32) -> u8 {
    radius.round().clamp(0.0, u8::MAX as f32) as u8
}

/// Filled call-to-action button
fn primary_button(text: &str, palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(text.to_owned())
            .strong()
            .color(palette.on_accent),
    )
    .fill(palette.accent)
    .min_size(Vec2::new(150.0, 40.0))
}

/// Outlined secondary button
fn secondary_button(text: &str, palette: &Palette) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_owned()).color(palette.accent))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.5, palette.accent))
        .min_size(Vec2::new(150.0, 40.0))
}
