//! Scroll progress normalization
//!
//! Progress is measured along the scroll axis between two intersections of an
//! element edge with a viewport edge. The default offsets (`"start end"` to
//! `"end start"`) give 0 when the element's leading edge touches the
//! viewport's trailing edge and 1 when the element's trailing edge touches the
//! viewport's leading edge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One-dimensional extent along the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Leading edge (top, for vertical scrolling)
    pub start: f32,
    /// Length of the span
    pub extent: f32,
}

impl Span {
    pub const fn new(start: f32, extent: f32) -> Self {
        Self { start, extent }
    }

    /// Span covering `start..end`
    pub fn from_range(start: f32, end: f32) -> Self {
        Self {
            start,
            extent: end - start,
        }
    }

    pub fn end(&self) -> f32 {
        self.start + self.extent
    }

    /// Position of the point `fraction` of the way along the span
    pub fn at(&self, fraction: f32) -> f32 {
        self.start + self.extent * fraction
    }

    /// Whether this span has usable geometry
    pub fn is_laid_out(&self) -> bool {
        self.start.is_finite() && self.extent.is_finite() && self.extent > 0.0
    }
}

/// A point on an element or viewport, as a fraction of its extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge(f32);

impl Edge {
    pub const START: Edge = Edge(0.0);
    pub const CENTER: Edge = Edge(0.5);
    pub const END: Edge = Edge(1.0);

    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v == 0.0 => f.write_str("start"),
            v if v == 0.5 => f.write_str("center"),
            v if v == 1.0 => f.write_str("end"),
            v => write!(f, "{}", v),
        }
    }
}

impl FromStr for Edge {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::START),
            "center" => Ok(Edge::CENTER),
            "end" => Ok(Edge::END),
            other => {
                let value: f32 = other
                    .parse()
                    .map_err(|_| OffsetParseError::UnknownEdge(other.to_string()))?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(OffsetParseError::OutOfRange(value));
                }
                Ok(Edge(value))
            }
        }
    }
}

/// Intersection of an element edge with a viewport edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Signed distance from the viewport point to the element point
    fn distance(&self, element: Span, viewport: Span) -> f32 {
        element.at(self.element.value()) - viewport.at(self.viewport.value())
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

impl FromStr for Intersection {
    type Err = OffsetParseError;

    /// Parse `"<element edge> <viewport edge>"`, e.g. `"start end"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(OffsetParseError::Malformed(s.to_string()));
        };
        Ok(Self::new(element.parse()?, viewport.parse()?))
    }
}

/// Errors parsing a scroll offset description
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OffsetParseError {
    #[error("expected \"<element edge> <viewport edge>\", got {0:?}")]
    Malformed(String),
    #[error("unknown edge {0:?} (expected start, center, end or a fraction)")]
    UnknownEdge(String),
    #[error("edge fraction {0} is outside [0, 1]")]
    OutOfRange(f32),
}

/// The pair of intersections at which progress is 0 and 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(String, String)", into = "(String, String)")]
pub struct ScrollOffsets {
    pub enter: Intersection,
    pub exit: Intersection,
}

impl Default for ScrollOffsets {
    /// Element about to enter (0) to element about to fully exit (1)
    fn default() -> Self {
        Self {
            enter: Intersection::new(Edge::START, Edge::END),
            exit: Intersection::new(Edge::END, Edge::START),
        }
    }
}

impl ScrollOffsets {
    pub const fn new(enter: Intersection, exit: Intersection) -> Self {
        Self { enter, exit }
    }

    /// Parse both intersections from their string form
    pub fn parse(enter: &str, exit: &str) -> Result<Self, OffsetParseError> {
        Ok(Self::new(enter.parse()?, exit.parse()?))
    }

    /// Progress of `element` through `viewport`, or `None` when geometry is unusable
    ///
    /// Scrolling moves both intersection distances at the same rate, so
    /// progress is the share of the enter-to-exit travel already covered.
    pub fn progress(&self, element: Span, viewport: Span) -> Option<ScrollProgress> {
        if !element.is_laid_out() || !viewport.is_laid_out() {
            return None;
        }

        let enter = self.enter.distance(element, viewport);
        let exit = self.exit.distance(element, viewport);
        let travel = enter - exit;
        if !travel.is_finite() || travel.abs() <= f32::EPSILON {
            return None;
        }

        Some(ScrollProgress::new(enter / travel))
    }
}

impl TryFrom<(String, String)> for ScrollOffsets {
    type Error = OffsetParseError;

    fn try_from((enter, exit): (String, String)) -> Result<Self, Self::Error> {
        Self::parse(&enter, &exit)
    }
}

impl From<ScrollOffsets> for (String, String) {
    fn from(offsets: ScrollOffsets) -> Self {
        (offsets.enter.to_string(), offsets.exit.to_string())
    }
}

/// Normalized progress of an element through the viewport, clamped to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    /// Clamp a raw progress value; NaN maps to 0
    pub fn new(raw: f32) -> Self {
        if raw.is_nan() {
            Self::START
        } else {
            Self(raw.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Span = Span::new(0.0, 800.0);

    fn progress_at(element_top: f32) -> f32 {
        ScrollOffsets::default()
            .progress(Span::new(element_top, 200.0), VIEWPORT)
            .unwrap()
            .value()
    }

    #[test]
    fn test_default_convention() {
        // Leading edge at the viewport's trailing edge
        assert_relative_eq!(progress_at(800.0), 0.0);
        // Trailing edge at the viewport's leading edge
        assert_relative_eq!(progress_at(-200.0), 1.0);
        // Element centred in the viewport
        assert_relative_eq!(progress_at(300.0), 0.5);
    }

    #[test]
    fn test_progress_clamps_outside_viewport() {
        assert_eq!(progress_at(5000.0), 0.0);
        assert_eq!(progress_at(-5000.0), 1.0);
    }

    #[test]
    fn test_custom_offsets() {
        // 0 when the element top hits the viewport bottom, 1 when it hits the centre
        let offsets = ScrollOffsets::parse("start end", "start center").unwrap();
        let at = |top: f32| {
            offsets
                .progress(Span::new(top, 100.0), VIEWPORT)
                .unwrap()
                .value()
        };
        assert_relative_eq!(at(800.0), 0.0);
        assert_relative_eq!(at(600.0), 0.5);
        assert_relative_eq!(at(400.0), 1.0);
    }

    #[test]
    fn test_missing_geometry() {
        let offsets = ScrollOffsets::default();
        assert!(offsets.progress(Span::new(0.0, 0.0), VIEWPORT).is_none());
        assert!(offsets.progress(Span::new(0.0, 100.0), Span::new(0.0, 0.0)).is_none());
        assert!(
            offsets
                .progress(Span::new(f32::NAN, 100.0), VIEWPORT)
                .is_none()
        );
    }

    #[test]
    fn test_degenerate_offsets() {
        let offsets = ScrollOffsets::parse("start end", "start end").unwrap();
        assert!(offsets.progress(Span::new(100.0, 100.0), VIEWPORT).is_none());
    }

    #[test]
    fn test_parse_edges() {
        let offsets = ScrollOffsets::parse("0.25 center", "end 0.1").unwrap();
        assert_eq!(offsets.enter.element.value(), 0.25);
        assert_eq!(offsets.enter.viewport, Edge::CENTER);
        assert_eq!(offsets.exit.viewport.value(), 0.1);

        assert!(matches!(
            "start".parse::<Intersection>(),
            Err(OffsetParseError::Malformed(_))
        ));
        assert!(matches!(
            "top bottom".parse::<Intersection>(),
            Err(OffsetParseError::UnknownEdge(_))
        ));
        assert!(matches!(
            "1.5 end".parse::<Intersection>(),
            Err(OffsetParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_offsets_ron() {
        let offsets: ScrollOffsets = ron::from_str(r#"("start end", "center start")"#).unwrap();
        assert_eq!(offsets.exit.element, Edge::CENTER);
        let text = ron::to_string(&ScrollOffsets::default()).unwrap();
        assert!(text.contains("start end"));
        let back: ScrollOffsets = ron::from_str(&text).unwrap();
        assert_eq!(back, ScrollOffsets::default());
    }
}
