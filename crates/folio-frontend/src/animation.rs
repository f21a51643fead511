//! Scroll-linked animation on top of egui
//!
//! egui lays out from scratch every frame, so geometry is collected while the
//! page is drawn ([`FrameLayout`]) and the animator samples it once the frame
//! is complete. Elements are drawn with the state derived from the previous
//! sample, and a repaint is requested whenever a sample changes anything.

use std::collections::HashMap;

use egui::{Rect, Sense, UiBuilder, Vec2};

use folio_core::{
    AnimationConfig, ElementAnimation, ElementId, Layout, PresentationState, SharedAnimator,
    Span, TrackHandle, track_shared,
};

use crate::state::SectionId;

/// Below this opacity an element's content ignores input
const MIN_INTERACTIVE_OPACITY: f32 = 0.05;

fn vertical_span(rect: Rect) -> Span {
    Span::from_range(rect.top(), rect.bottom())
}

/// Geometry recorded while drawing one frame
#[derive(Debug, Default)]
pub struct FrameLayout {
    viewport: Option<Span>,
    bounds: HashMap<ElementId, Span>,
}

impl FrameLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything recorded for the previous frame
    pub fn clear(&mut self) {
        self.viewport = None;
        self.bounds.clear();
    }

    pub fn set_viewport(&mut self, rect: Rect) {
        self.viewport = Some(vertical_span(rect));
    }

    pub fn record(&mut self, id: ElementId, rect: Rect) {
        self.bounds.insert(id, vertical_span(rect));
    }
}

impl Layout for FrameLayout {
    fn viewport(&self) -> Option<Span> {
        self.viewport
    }

    fn bounds(&self, id: ElementId) -> Option<Span> {
        self.bounds.get(&id).copied()
    }
}

/// Draws animated elements and feeds their geometry back to the animator
pub struct Presenter {
    animator: SharedAnimator,
    states: HashMap<ElementId, PresentationState>,
    /// Content height of each element as measured on the previous frame
    heights: HashMap<ElementId, f32>,
    layout: FrameLayout,
    enabled: bool,
}

impl Presenter {
    pub fn new(animator: SharedAnimator, enabled: bool) -> Self {
        Self {
            animator,
            states: HashMap::new(),
            heights: HashMap::new(),
            layout: FrameLayout::new(),
            enabled,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Drop cached states and measurements
    pub fn reset(&mut self) {
        self.states.clear();
        self.heights.clear();
        self.layout.clear();
    }

    /// State an element is drawn with this frame
    pub fn state(&self, id: ElementId) -> PresentationState {
        if !self.enabled {
            return PresentationState::IDENTITY;
        }
        match self.states.get(&id) {
            Some(state) => *state,
            // Not sampled yet; start from its lower-boundary values
            None => self
                .animator
                .lock()
                .derive(id)
                .unwrap_or(PresentationState::IDENTITY),
        }
    }

    /// Start collecting geometry for a new frame
    pub fn begin_frame(&mut self, viewport: Rect) {
        self.layout.clear();
        self.layout.set_viewport(viewport);
    }

    /// Draw `add_contents` for the element `id` with its presentation state
    ///
    /// The element's untransformed slot is allocated in the parent layout and
    /// recorded as its bounds. The content itself is drawn in a child ui that
    /// is offset vertically, narrowed around the slot's centre by `scale`, and
    /// faded by `opacity`. Content that is all but invisible is disabled.
    /// Rotation, blur and color adjustments are left to `add_contents`.
    pub fn animated<R>(
        &mut self,
        ui: &mut egui::Ui,
        id: ElementId,
        add_contents: impl FnOnce(&mut egui::Ui, &PresentationState) -> R,
    ) -> R {
        let state = self.state(id);
        let width = ui.available_width();
        let height = self.heights.get(&id).copied().unwrap_or(0.0);

        let (slot, _) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());
        self.layout.record(id, slot);

        let scaled_width = width * state.scale.clamp(0.0, 1.0);
        let min = slot.min + Vec2::new((width - scaled_width) * 0.5, state.offset_y);
        let content_rect = Rect::from_min_size(min, Vec2::new(scaled_width, f32::INFINITY));

        let mut child = ui.new_child(
            UiBuilder::new()
                .id_salt(id)
                .max_rect(content_rect)
                .layout(*ui.layout()),
        );
        child.multiply_opacity(state.opacity);
        if state.opacity < MIN_INTERACTIVE_OPACITY {
            child.disable();
        }
        let inner = add_contents(&mut child, &state);

        let measured = child.min_rect().height();
        if (measured - height).abs() > 0.5 {
            self.heights.insert(id, measured);
            ui.ctx().request_repaint();
        }

        inner
    }

    /// Sample the animator against this frame's geometry
    ///
    /// Cached state of elements that are no longer tracked is dropped first.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        let mut animator = self.animator.lock();
        self.states.retain(|id, _| animator.is_tracked(*id));
        self.heights.retain(|id, _| animator.is_tracked(*id));

        if !self.enabled {
            return;
        }
        let changed = animator.sample(&self.layout, &mut self.states);
        drop(animator);
        if changed {
            ctx.request_repaint();
        }
    }
}

/// Registrations of every animated element on the page
pub struct PageAnimations {
    animator: SharedAnimator,
    card: ElementAnimation,
    hero: TrackHandle,
    sections: HashMap<SectionId, TrackHandle>,
    cards: HashMap<u32, TrackHandle>,
}

impl PageAnimations {
    pub fn new(animator: &SharedAnimator, config: &AnimationConfig) -> Self {
        let hero = track_shared(animator, config.hero.curves.clone(), config.hero.offsets);
        let sections = [SectionId::About, SectionId::Projects, SectionId::Contact]
            .into_iter()
            .map(|section| {
                let handle = track_shared(
                    animator,
                    config.section.curves.clone(),
                    config.section.offsets,
                );
                (section, handle)
            })
            .collect();

        Self {
            animator: animator.clone(),
            card: config.card.clone(),
            hero,
            sections,
            cards: HashMap::new(),
        }
    }

    pub fn hero(&self) -> ElementId {
        self.hero.id()
    }

    /// Heading and body of a section; the hero has its own registration
    pub fn section(&self, section: SectionId) -> ElementId {
        match self.sections.get(&section) {
            Some(handle) => handle.id(),
            None => self.hero.id(),
        }
    }

    /// Card of a project, registered the first time it is shown
    pub fn card(&mut self, project_id: u32) -> ElementId {
        self.cards
            .entry(project_id)
            .or_insert_with(|| {
                track_shared(
                    &self.animator,
                    self.card.curves.clone(),
                    self.card.offsets,
                )
            })
            .id()
    }

    /// Unregister cards whose projects are no longer shown
    pub fn retain_cards(&mut self, shown: impl IntoIterator<Item = u32>) {
        let shown: std::collections::HashSet<u32> = shown.into_iter().collect();
        self.cards.retain(|project_id, _| shown.contains(project_id));
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}
