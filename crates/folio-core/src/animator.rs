//! Scroll-linked animator
//!
//! Elements are registered with a [`CurveSet`] and [`ScrollOffsets`]. On each
//! frame (or scroll/resize) signal the host calls [`ScrollAnimator::sample`],
//! which reads the current geometry from a [`Layout`], recomputes every
//! element's progress and writes the derived [`PresentationState`] to a
//! [`PresentationSink`]. Nothing is accumulated between samples.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::presentation::{CurveSet, PresentationState};
use crate::progress::{ScrollOffsets, ScrollProgress, Span};

/// Identifier of a tracked element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

/// Geometry source sampled on every signal
pub trait Layout {
    /// Visible viewport along the scroll axis
    fn viewport(&self) -> Option<Span>;

    /// Bounds of a tracked element along the scroll axis
    fn bounds(&self, id: ElementId) -> Option<Span>;
}

/// Receiver of recomputed presentation states
pub trait PresentationSink {
    fn apply(&mut self, id: ElementId, state: &PresentationState);
}

impl PresentationSink for HashMap<ElementId, PresentationState> {
    fn apply(&mut self, id: ElementId, state: &PresentationState) {
        self.insert(id, *state);
    }
}

/// Registration of one animated element
#[derive(Debug, Clone)]
struct Tracked {
    curves: CurveSet,
    offsets: ScrollOffsets,
    progress: ScrollProgress,
}

/// Registry of scroll-animated elements
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    elements: HashMap<ElementId, Tracked>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element for progress sampling
    pub fn track(&mut self, curves: CurveSet, offsets: ScrollOffsets) -> ElementId {
        let id = ElementId::new();
        self.elements.insert(
            id,
            Tracked {
                curves,
                offsets,
                progress: ScrollProgress::START,
            },
        );
        tracing::trace!(?id, "Tracking element");
        id
    }

    /// Unregister an element; returns whether it was tracked
    pub fn untrack(&mut self, id: ElementId) -> bool {
        let removed = self.elements.remove(&id).is_some();
        if removed {
            tracing::trace!(?id, "Untracked element");
        }
        removed
    }

    pub fn is_tracked(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Progress recorded by the last sample
    pub fn progress(&self, id: ElementId) -> Option<ScrollProgress> {
        self.elements.get(&id).map(|e| e.progress)
    }

    /// Presentation state for the element's current progress
    pub fn derive(&self, id: ElementId) -> Option<PresentationState> {
        self.elements
            .get(&id)
            .map(|e| e.curves.derive(e.progress))
    }

    /// Recompute progress from `layout` for every element and write the results
    ///
    /// Elements without usable geometry fall back to progress 0, which
    /// resolves to each curve's lower-boundary value. Returns whether any
    /// element's progress changed.
    pub fn sample(&mut self, layout: &impl Layout, sink: &mut impl PresentationSink) -> bool {
        let viewport = layout.viewport();
        let mut changed = false;

        for (id, element) in &mut self.elements {
            let progress = viewport
                .zip(layout.bounds(*id))
                .and_then(|(viewport, bounds)| element.offsets.progress(bounds, viewport))
                .unwrap_or(ScrollProgress::START);

            changed |= progress != element.progress;
            element.progress = progress;
            sink.apply(*id, &element.curves.derive(progress));
        }

        changed
    }
}

/// Animator shared between the app and the handles of its elements
pub type SharedAnimator = Arc<Mutex<ScrollAnimator>>;

/// Create a new shared animator
pub fn create_shared_animator() -> SharedAnimator {
    Arc::new(Mutex::new(ScrollAnimator::new()))
}

/// Registration that unregisters its element when dropped
#[derive(Debug)]
pub struct TrackHandle {
    id: ElementId,
    animator: Weak<Mutex<ScrollAnimator>>,
}

impl TrackHandle {
    pub fn id(&self) -> ElementId {
        self.id
    }
}

impl Drop for TrackHandle {
    fn drop(&mut self) {
        if let Some(animator) = self.animator.upgrade() {
            animator.lock().untrack(self.id);
        }
    }
}

/// Register an element on a shared animator, scoped to the returned handle
pub fn track_shared(
    animator: &SharedAnimator,
    curves: CurveSet,
    offsets: ScrollOffsets,
) -> TrackHandle {
    let id = animator.lock().track(curves, offsets);
    TrackHandle {
        id,
        animator: Arc::downgrade(animator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::AnimationCurve;
    use crate::presentation::Parameter;

    /// Layout with a fixed viewport and movable elements
    struct TestLayout {
        viewport: Option<Span>,
        bounds: HashMap<ElementId, Span>,
    }

    impl TestLayout {
        fn new(viewport_height: f32) -> Self {
            Self {
                viewport: Some(Span::new(0.0, viewport_height)),
                bounds: HashMap::new(),
            }
        }
    }

    impl Layout for TestLayout {
        fn viewport(&self) -> Option<Span> {
            self.viewport
        }

        fn bounds(&self, id: ElementId) -> Option<Span> {
            self.bounds.get(&id).copied()
        }
    }

    /// Sink that records every write
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(ElementId, PresentationState)>,
    }

    impl PresentationSink for RecordingSink {
        fn apply(&mut self, id: ElementId, state: &PresentationState) {
            self.writes.push((id, *state));
        }
    }

    fn card_curves() -> CurveSet {
        CurveSet::new()
            .with(Parameter::Offset, AnimationCurve::linear(80.0, -80.0))
            .with(
                Parameter::Opacity,
                AnimationCurve::new([(0.0, 0.0), (0.5, 1.0)]).unwrap(),
            )
            .with(Parameter::Scale, AnimationCurve::linear(0.9, 1.1))
            .with(Parameter::Rotation, AnimationCurve::linear(-6.0, 6.0))
            .with(Parameter::Blur, AnimationCurve::linear(10.0, 0.0))
            .with(Parameter::Brightness, AnimationCurve::linear(0.6, 1.0))
            .with(Parameter::Saturation, AnimationCurve::linear(0.2, 1.2))
    }

    #[test]
    fn test_sample_updates_progress() {
        let mut animator = ScrollAnimator::new();
        let id = animator.track(card_curves(), ScrollOffsets::default());
        let mut layout = TestLayout::new(800.0);
        let mut sink = HashMap::new();

        layout.bounds.insert(id, Span::new(300.0, 200.0));
        assert!(animator.sample(&layout, &mut sink));
        assert_eq!(animator.progress(id), Some(ScrollProgress::new(0.5)));
        assert_eq!(sink.get(&id), animator.derive(id).as_ref());

        // Same geometry again: nothing changes
        assert!(!animator.sample(&layout, &mut sink));
    }

    #[test]
    fn test_missing_geometry_uses_lower_boundary() {
        let mut animator = ScrollAnimator::new();
        let id = animator.track(card_curves(), ScrollOffsets::default());
        let mut layout = TestLayout::new(800.0);
        layout.viewport = None;
        let mut sink = HashMap::new();

        animator.sample(&layout, &mut sink);
        let state = sink[&id];
        assert_eq!(state.offset_y, 80.0);
        assert_eq!(state.opacity, 0.0);
        assert!(state.is_finite());

        // Geometry becomes available
        layout.viewport = Some(Span::new(0.0, 800.0));
        layout.bounds.insert(id, Span::new(-200.0, 200.0));
        animator.sample(&layout, &mut sink);
        assert_eq!(sink[&id].offset_y, -80.0);
    }

    #[test]
    fn test_no_writes_after_untrack() {
        let mut animator = ScrollAnimator::new();
        let kept = animator.track(card_curves(), ScrollOffsets::default());
        let removed = animator.track(card_curves(), ScrollOffsets::default());
        let mut layout = TestLayout::new(800.0);
        layout.bounds.insert(kept, Span::new(100.0, 200.0));
        layout.bounds.insert(removed, Span::new(400.0, 200.0));

        assert!(animator.untrack(removed));
        assert!(!animator.untrack(removed));

        let mut sink = RecordingSink::default();
        for scroll in 0..10 {
            layout.viewport = Some(Span::new(scroll as f32 * 50.0, 800.0));
            animator.sample(&layout, &mut sink);
        }
        assert!(!sink.writes.is_empty());
        assert!(sink.writes.iter().all(|(id, _)| *id == kept));
        assert!(animator.derive(removed).is_none());
    }

    #[test]
    fn test_handle_drop_unregisters() {
        let animator = create_shared_animator();
        let handle = track_shared(&animator, card_curves(), ScrollOffsets::default());
        let id = handle.id();
        assert!(animator.lock().is_tracked(id));
        assert_eq!(
            animator.lock().progress(id),
            Some(ScrollProgress::START)
        );

        drop(handle);
        assert!(!animator.lock().is_tracked(id));

        let mut layout = TestLayout::new(600.0);
        layout.bounds.insert(id, Span::new(0.0, 100.0));
        let mut sink = RecordingSink::default();
        animator.lock().sample(&layout, &mut sink);
        assert!(sink.writes.is_empty());
    }

    #[test]
    fn test_handle_outlives_animator() {
        let animator = create_shared_animator();
        let handle = track_shared(&animator, CurveSet::new(), ScrollOffsets::default());
        let weak = Arc::downgrade(&animator);
        drop(animator);
        assert!(weak.upgrade().is_none());
        drop(handle);
    }

    #[test]
    fn test_scroll_through_viewport_is_monotonic() {
        let mut animator = ScrollAnimator::new();
        let id = animator.track(card_curves(), ScrollOffsets::default());
        let mut layout = TestLayout::new(800.0);
        let mut sink = HashMap::new();

        // From fully below the viewport to fully above it
        let mut states = Vec::new();
        let mut top = 1200.0;
        while top >= -600.0 {
            layout.bounds.insert(id, Span::new(top, 200.0));
            animator.sample(&layout, &mut sink);
            states.push((animator.progress(id).unwrap().value(), sink[&id]));
            top -= 25.0;
        }

        let (first_progress, first) = states[0];
        assert_eq!(first_progress, 0.0);
        assert_eq!(first.offset_y, 80.0);
        assert_eq!(first.blur, 10.0);

        let (mid_progress, _) = states
            .iter()
            .find(|(_, s)| s.offset_y == 0.0)
            .copied()
            .unwrap();
        assert!((mid_progress - 0.5).abs() < 1e-6);

        let (last_progress, last) = states[states.len() - 1];
        assert_eq!(last_progress, 1.0);
        assert_eq!(last.offset_y, -80.0);
        assert_eq!(last.saturation, 1.2);

        for pair in states.windows(2) {
            let (p0, a) = pair[0];
            let (p1, b) = pair[1];
            assert!(a.is_finite() && b.is_finite());
            assert!(p1 >= p0);
            assert!(b.offset_y <= a.offset_y);
            assert!(b.opacity >= a.opacity);
            assert!(b.scale >= a.scale);
            assert!(b.rotation_deg >= a.rotation_deg);
            assert!(b.blur <= a.blur);
            assert!(b.brightness >= a.brightness);
            assert!(b.saturation >= a.saturation);
        }
    }
}
