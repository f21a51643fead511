//! Piecewise-linear animation curves
//!
//! An [`AnimationCurve`] maps a scroll progress value to one presentation
//! parameter. Control points are strictly increasing in progress, and
//! evaluation outside the first/last point clamps to the boundary value.

use serde::{Deserialize, Serialize};

/// A single (progress, value) control point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub progress: f32,
    pub value: f32,
}

impl ControlPoint {
    pub const fn new(progress: f32, value: f32) -> Self {
        Self { progress, value }
    }
}

impl From<(f32, f32)> for ControlPoint {
    fn from((progress, value): (f32, f32)) -> Self {
        Self::new(progress, value)
    }
}

/// Curve construction errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("curve has no control points")]
    Empty,
    #[error("control point {index} is not finite")]
    NotFinite { index: usize },
    #[error("control point {index} does not increase in progress ({previous} -> {current})")]
    NotIncreasing {
        index: usize,
        previous: f32,
        current: f32,
    },
}

/// Piecewise-linear mapping from progress to a parameter value
///
/// Serialized as a list of `(progress, value)` tuples; deserialization goes
/// through the same validation as [`AnimationCurve::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f32, f32)>", into = "Vec<(f32, f32)>")]
pub struct AnimationCurve {
    points: Vec<ControlPoint>,
}

impl AnimationCurve {
    /// Create a curve from control points
    pub fn new<P>(points: impl IntoIterator<Item = P>) -> Result<Self, CurveError>
    where
        P: Into<ControlPoint>,
    {
        let points: Vec<ControlPoint> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(CurveError::Empty);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.progress.is_finite() || !point.value.is_finite() {
                return Err(CurveError::NotFinite { index });
            }
        }

        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].progress <= pair[0].progress {
                return Err(CurveError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0].progress,
                    current: pair[1].progress,
                });
            }
        }

        Ok(Self { points })
    }

    /// A curve that holds one value for every progress
    pub fn constant(value: f32) -> Self {
        Self {
            points: vec![ControlPoint::new(0.0, value)],
        }
    }

    /// Two-point curve from `from` at progress 0 to `to` at progress 1
    pub fn linear(from: f32, to: f32) -> Self {
        Self {
            points: vec![ControlPoint::new(0.0, from), ControlPoint::new(1.0, to)],
        }
    }

    /// Curve from a built-in table known to be valid
    pub(crate) fn from_table(table: &[(f32, f32)]) -> Self {
        debug_assert!(Self::new(table.iter().copied()).is_ok(), "invalid table {table:?}");
        Self {
            points: table.iter().copied().map(ControlPoint::from).collect(),
        }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Value at the first control point (the lower boundary)
    pub fn first_value(&self) -> f32 {
        self.points[0].value
    }

    /// Value at the last control point (the upper boundary)
    pub fn last_value(&self) -> f32 {
        self.points[self.points.len() - 1].value
    }

    /// Evaluate the curve at `progress`
    pub fn evaluate(&self, progress: f32) -> f32 {
        evaluate(self, progress)
    }
}

impl TryFrom<Vec<(f32, f32)>> for AnimationCurve {
    type Error = CurveError;

    fn try_from(points: Vec<(f32, f32)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<AnimationCurve> for Vec<(f32, f32)> {
    fn from(curve: AnimationCurve) -> Self {
        curve
            .points
            .into_iter()
            .map(|p| (p.progress, p.value))
            .collect()
    }
}

/// Linear interpolation between the two control points bracketing `progress`
///
/// Clamps to the first/last value outside the curve's domain. A NaN progress
/// resolves to the lower boundary so callers never observe NaN output.
pub fn evaluate(curve: &AnimationCurve, progress: f32) -> f32 {
    let points = curve.points();
    let first = points[0];
    let last = points[points.len() - 1];

    if progress.is_nan() || progress <= first.progress {
        return first.value;
    }
    if progress >= last.progress {
        return last.value;
    }

    // First point strictly after `progress`; guaranteed in 1..len by the checks above
    let upper = points.partition_point(|p| p.progress <= progress);
    let p0 = points[upper - 1];
    let p1 = points[upper];

    if progress == p0.progress {
        return p0.value;
    }

    let t = (progress - p0.progress) / (p1.progress - p0.progress);
    p0.value + (p1.value - p0.value) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fade_curve() -> AnimationCurve {
        AnimationCurve::new([(0.0, 0.0), (0.3, 1.0), (0.7, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_clamps_below_and_above_domain() {
        let curve = AnimationCurve::new([(0.2, 10.0), (0.8, -4.0)]).unwrap();
        for p in [-5.0, -0.1, 0.0, 0.1, 0.2] {
            assert_eq!(evaluate(&curve, p), curve.first_value());
        }
        for p in [0.8, 0.9, 1.0, 3.0] {
            assert_eq!(evaluate(&curve, p), curve.last_value());
        }
    }

    #[test]
    fn test_exact_control_points() {
        let curve = AnimationCurve::new([(0.0, 50.0), (0.25, -3.5), (0.6, 7.25), (1.0, 0.0)])
            .unwrap();
        for point in curve.points() {
            assert_eq!(evaluate(&curve, point.progress), point.value);
        }
    }

    #[test]
    fn test_midpoint_interpolation() {
        let curve = fade_curve();
        for pair in curve.points().windows(2) {
            let mid = (pair[0].progress + pair[1].progress) / 2.0;
            assert_relative_eq!(
                evaluate(&curve, mid),
                (pair[0].value + pair[1].value) / 2.0,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_interpolation_ratio() {
        let curve = AnimationCurve::linear(100.0, -100.0);
        assert_relative_eq!(curve.evaluate(0.25), 50.0);
        assert_relative_eq!(curve.evaluate(0.75), -50.0);
    }

    #[test]
    fn test_nan_progress_uses_lower_boundary() {
        let curve = fade_curve();
        assert_eq!(curve.evaluate(f32::NAN), 0.0);
    }

    #[test]
    fn test_constant_curve() {
        let curve = AnimationCurve::constant(0.4);
        assert_eq!(curve.evaluate(-1.0), 0.4);
        assert_eq!(curve.evaluate(0.5), 0.4);
        assert_eq!(curve.evaluate(2.0), 0.4);
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let empty: [(f32, f32); 0] = [];
        assert_eq!(AnimationCurve::new(empty), Err(CurveError::Empty));
        assert!(matches!(
            AnimationCurve::new([(0.0, 1.0), (0.0, 2.0)]),
            Err(CurveError::NotIncreasing { index: 1, .. })
        ));
        assert!(matches!(
            AnimationCurve::new([(0.5, 1.0), (0.2, 2.0)]),
            Err(CurveError::NotIncreasing { index: 1, .. })
        ));
        assert_eq!(
            AnimationCurve::new([(0.0, 1.0), (1.0, f32::INFINITY)]),
            Err(CurveError::NotFinite { index: 1 })
        );
    }

    #[test]
    fn test_ron_validation() {
        let curve: AnimationCurve = ron::from_str("[(0.0, 1.0), (1.0, 0.5)]").unwrap();
        assert_eq!(curve.last_value(), 0.5);
        assert!(ron::from_str::<AnimationCurve>("[(1.0, 1.0), (0.5, 0.5)]").is_err());
    }
}
