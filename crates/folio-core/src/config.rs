//! Site configuration
//!
//! Profile, project list, pagination and the animation tables of each element
//! kind. Stored as RON; anything missing from the file falls back to the
//! built-in defaults.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::{Profile, Project, ProjectPager};
use crate::curve::AnimationCurve;
use crate::presentation::{CurveSet, Parameter};
use crate::progress::{Edge, Intersection, ScrollOffsets};

/// Offsets and curves for one kind of animated element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementAnimation {
    #[serde(default)]
    pub offsets: ScrollOffsets,
    #[serde(default)]
    pub curves: CurveSet,
}

/// Animation tables per element kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Whether scroll-linked animation runs at all
    pub enabled: bool,
    /// Hero banner parallax while it scrolls out of view
    pub hero: ElementAnimation,
    /// Section headings and bodies
    pub section: ElementAnimation,
    /// Project cards
    pub card: ElementAnimation,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hero: default_hero(),
            section: default_section(),
            card: default_card(),
        }
    }
}

fn default_hero() -> ElementAnimation {
    // 0 with the hero's top at the viewport top, 1 once its bottom leaves
    let offsets = ScrollOffsets::new(
        Intersection::new(Edge::START, Edge::START),
        Intersection::new(Edge::END, Edge::START),
    );
    let curves = CurveSet::new()
        .with(Parameter::Offset, AnimationCurve::linear(0.0, 120.0))
        .with(Parameter::Opacity, AnimationCurve::from_table(&[(0.0, 1.0), (0.8, 0.0)]))
        .with(Parameter::Scale, AnimationCurve::linear(1.0, 0.92))
        .with(Parameter::Blur, AnimationCurve::from_table(&[(0.2, 0.0), (1.0, 6.0)]));
    ElementAnimation { offsets, curves }
}

fn default_section() -> ElementAnimation {
    let curves = CurveSet::new()
        .with(
            Parameter::Offset,
            AnimationCurve::from_table(&[(0.0, 48.0), (0.25, 0.0)]),
        )
        .with(
            Parameter::Opacity,
            AnimationCurve::from_table(&[(0.0, 0.0), (0.2, 1.0), (0.85, 1.0), (1.0, 0.4)]),
        );
    ElementAnimation {
        offsets: ScrollOffsets::default(),
        curves,
    }
}

fn default_card() -> ElementAnimation {
    let curves = CurveSet::new()
        .with(
            Parameter::Offset,
            AnimationCurve::from_table(&[(0.0, 80.0), (0.3, 0.0), (0.7, 0.0), (1.0, -40.0)]),
        )
        .with(
            Parameter::Rotation,
            AnimationCurve::from_table(&[(0.0, -4.0), (0.3, 0.0), (0.7, 0.0), (1.0, 3.0)]),
        )
        .with(
            Parameter::Scale,
            AnimationCurve::from_table(&[(0.0, 0.92), (0.3, 1.0), (0.7, 1.0), (1.0, 0.96)]),
        )
        .with(
            Parameter::Opacity,
            AnimationCurve::from_table(&[(0.0, 0.0), (0.25, 1.0), (0.8, 1.0), (1.0, 0.4)]),
        )
        .with(
            Parameter::Blur,
            AnimationCurve::from_table(&[(0.0, 8.0), (0.3, 0.0), (0.8, 0.0), (1.0, 4.0)]),
        )
        .with(
            Parameter::Brightness,
            AnimationCurve::from_table(&[(0.0, 0.7), (0.3, 1.0), (0.8, 1.0), (1.0, 0.85)]),
        )
        .with(
            Parameter::Saturation,
            AnimationCurve::from_table(&[(0.0, 0.4), (0.3, 1.0), (0.8, 1.0), (1.0, 0.7)]),
        );
    ElementAnimation {
        offsets: ScrollOffsets::default(),
        curves,
    }
}

/// Complete site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub pagination: ProjectPager,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl SiteConfig {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::load_from_bytes(&content)
    }

    /// Load configuration from RON bytes (embedded or fetched)
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let content =
            std::str::from_utf8(data).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        let config: SiteConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize configuration to RON bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{ScrollProgress, Span};

    const SITE: &str = include_str!("../../../assets/site.ron");

    #[test]
    fn test_embedded_site_config() {
        let config = SiteConfig::load_from_bytes(SITE.as_bytes()).unwrap();
        assert!(!config.profile.name.is_empty());
        assert_eq!(config.projects.len(), 8);
        assert_eq!(config.projects[0].id, 1);
        assert!(config.animation.enabled);
    }

    #[test]
    fn test_default_tables_are_valid() {
        let animation = AnimationConfig::default();
        for element in [&animation.hero, &animation.section, &animation.card] {
            for parameter in Parameter::ALL {
                if let Some(curve) = element.curves.get(parameter) {
                    let points: Vec<(f32, f32)> = curve.clone().into();
                    assert!(AnimationCurve::new(points).is_ok());
                }
            }
            assert!(element.curves.derive(ScrollProgress::START).is_finite());
            assert!(element.curves.derive(ScrollProgress::END).is_finite());
        }
    }

    #[test]
    fn test_hero_offsets_start_at_top() {
        let hero = default_hero();
        let viewport = Span::new(0.0, 800.0);
        let at_top = hero.offsets.progress(Span::new(0.0, 500.0), viewport).unwrap();
        let gone = hero.offsets.progress(Span::new(-500.0, 500.0), viewport).unwrap();
        assert_eq!(at_top.value(), 0.0);
        assert_eq!(gone.value(), 1.0);
    }

    #[test]
    fn test_partial_animation_override() {
        let text = r#"(
            profile: (
                name: "Test Person",
                tagline: "",
                about: "",
                skills: [],
                email: "test@example.com",
                github: "",
                linkedin: "",
                avatar: "/me.jpeg",
                resume: "/cv.pdf",
            ),
            projects: [],
            animation: (
                card: (
                    offsets: ("start end", "center center"),
                    curves: { opacity: [(0.0, 0.5), (1.0, 1.0)] },
                ),
            ),
        )"#;
        let config = SiteConfig::load_from_bytes(text.as_bytes()).unwrap();
        assert_eq!(config.pagination, ProjectPager::default());
        assert_eq!(config.animation.hero, default_hero());
        assert!(config.animation.card.curves.get(Parameter::Offset).is_none());
        assert_eq!(
            config.animation.card.offsets.exit,
            Intersection::new(Edge::CENTER, Edge::CENTER)
        );
    }

    #[test]
    fn test_invalid_curve_is_rejected() {
        let text = SITE.replace(
            "projects:",
            "animation: (card: (curves: { scale: [(0.5, 1.0), (0.1, 0.0)] })),\n    projects:",
        );
        assert!(matches!(
            SiteConfig::load_from_bytes(text.as_bytes()),
            Err(ConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn test_duplicate_project_ids() {
        let mut config = SiteConfig::load_from_bytes(SITE.as_bytes()).unwrap();
        let first = config.projects[0].clone();
        config.projects.push(first);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.ron");
        let config = SiteConfig::load_from_bytes(SITE.as_bytes()).unwrap();

        config.save(&path).unwrap();
        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
