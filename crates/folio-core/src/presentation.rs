//! Presentation parameters derived from scroll progress

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::curve::AnimationCurve;
use crate::progress::ScrollProgress;

/// A single animatable presentation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// Vertical translation in points (positive moves down)
    Offset,
    /// Rotation in degrees
    Rotation,
    /// Uniform scale factor
    Scale,
    /// Opacity in [0, 1]
    Opacity,
    /// Blur radius in points
    Blur,
    /// Brightness multiplier
    Brightness,
    /// Saturation multiplier
    Saturation,
}

impl Parameter {
    pub const ALL: [Parameter; 7] = [
        Parameter::Offset,
        Parameter::Rotation,
        Parameter::Scale,
        Parameter::Opacity,
        Parameter::Blur,
        Parameter::Brightness,
        Parameter::Saturation,
    ];

    /// Value that leaves the element unchanged
    pub fn identity(self) -> f32 {
        match self {
            Parameter::Offset | Parameter::Rotation | Parameter::Blur => 0.0,
            Parameter::Scale
            | Parameter::Opacity
            | Parameter::Brightness
            | Parameter::Saturation => 1.0,
        }
    }

    /// Bring a derived value into the parameter's valid domain
    fn sanitize(self, value: f32) -> f32 {
        match self {
            Parameter::Opacity => value.clamp(0.0, 1.0),
            Parameter::Scale
            | Parameter::Blur
            | Parameter::Brightness
            | Parameter::Saturation => value.max(0.0),
            Parameter::Offset | Parameter::Rotation => value,
        }
    }
}

/// All presentation parameters of one element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationState {
    pub offset_y: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur: f32,
    pub brightness: f32,
    pub saturation: f32,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PresentationState {
    pub const IDENTITY: PresentationState = PresentationState {
        offset_y: 0.0,
        rotation_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
        blur: 0.0,
        brightness: 1.0,
        saturation: 1.0,
    };

    pub fn get(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::Offset => self.offset_y,
            Parameter::Rotation => self.rotation_deg,
            Parameter::Scale => self.scale,
            Parameter::Opacity => self.opacity,
            Parameter::Blur => self.blur,
            Parameter::Brightness => self.brightness,
            Parameter::Saturation => self.saturation,
        }
    }

    fn set(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::Offset => self.offset_y = value,
            Parameter::Rotation => self.rotation_deg = value,
            Parameter::Scale => self.scale = value,
            Parameter::Opacity => self.opacity = value,
            Parameter::Blur => self.blur = value,
            Parameter::Brightness => self.brightness = value,
            Parameter::Saturation => self.saturation = value,
        }
    }

    /// Whether every parameter is a finite number
    pub fn is_finite(&self) -> bool {
        Parameter::ALL.iter().all(|p| self.get(*p).is_finite())
    }
}

/// The fixed set of curves animating one element
///
/// Parameters without a curve keep their identity value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveSet {
    curves: BTreeMap<Parameter, AnimationCurve>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with(mut self, parameter: Parameter, curve: AnimationCurve) -> Self {
        self.curves.insert(parameter, curve);
        self
    }

    pub fn insert(&mut self, parameter: Parameter, curve: AnimationCurve) -> Option<AnimationCurve> {
        self.curves.insert(parameter, curve)
    }

    pub fn get(&self, parameter: Parameter) -> Option<&AnimationCurve> {
        self.curves.get(&parameter)
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Evaluate every curve at `progress`
    pub fn derive(&self, progress: ScrollProgress) -> PresentationState {
        let mut state = PresentationState::IDENTITY;
        for (parameter, curve) in &self.curves {
            state.set(*parameter, parameter.sanitize(curve.evaluate(progress.value())));
        }
        state
    }
}
