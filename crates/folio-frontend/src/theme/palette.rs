//! Color palette for the portfolio theme
//!
//! Dark colors are the top-level constants; light colors live in [`light`].
//! Both follow a neutral gray scale with a single blue accent.

use egui::Color32;

use folio_core::ThemePreference;

// =============================================================================
// Background hierarchy (dark)
// =============================================================================

/// Page background
pub const BG_PAGE: Color32 = Color32::from_rgb(17, 24, 39);
/// Banded sections (hero, contact)
pub const BG_BAND: Color32 = Color32::from_rgb(24, 32, 48);
/// Card surface
pub const BG_CARD: Color32 = Color32::from_rgb(31, 41, 55);
/// Chip and input background
pub const BG_CHIP: Color32 = Color32::from_rgb(55, 65, 81);

// =============================================================================
// Text and borders (dark)
// =============================================================================

/// Headings and body text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(243, 244, 246);
/// Descriptions and captions
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175);
/// Card outline
pub const BORDER: Color32 = Color32::from_rgb(55, 65, 81);

// =============================================================================
// Accent (dark)
// =============================================================================

/// Links and primary buttons
pub const ACCENT: Color32 = Color32::from_rgb(96, 165, 250);
/// Accent hover state
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(147, 197, 253);
/// Text on accent fills
pub const ON_ACCENT: Color32 = Color32::from_rgb(17, 24, 39);

// =============================================================================
// Light theme colors
// =============================================================================

pub mod light {
    use egui::Color32;

    /// Page background
    pub const BG_PAGE: Color32 = Color32::from_rgb(249, 250, 251);
    /// Banded sections (hero, contact)
    pub const BG_BAND: Color32 = Color32::from_rgb(229, 231, 235);
    /// Card surface
    pub const BG_CARD: Color32 = Color32::from_rgb(255, 255, 255);
    /// Chip and input background
    pub const BG_CHIP: Color32 = Color32::from_rgb(229, 231, 235);

    /// Headings and body text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(31, 41, 55);
    /// Descriptions and captions
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(75, 85, 99);
    /// Card outline
    pub const BORDER: Color32 = Color32::from_rgb(226, 232, 240);

    /// Links and primary buttons
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Accent hover state
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(37, 99, 235);
    /// Text on accent fills
    pub const ON_ACCENT: Color32 = Color32::WHITE;
}

/// Runtime palette for the active theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_page: Color32,
    pub bg_band: Color32,
    pub bg_card: Color32,
    pub bg_chip: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub on_accent: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg_page: BG_PAGE,
        bg_band: BG_BAND,
        bg_card: BG_CARD,
        bg_chip: BG_CHIP,
        text_primary: TEXT_PRIMARY,
        text_secondary: TEXT_SECONDARY,
        border: BORDER,
        accent: ACCENT,
        on_accent: ON_ACCENT,
    };

    pub const LIGHT: Palette = Palette {
        bg_page: light::BG_PAGE,
        bg_band: light::BG_BAND,
        bg_card: light::BG_CARD,
        bg_chip: light::BG_CHIP,
        text_primary: light::TEXT_PRIMARY,
        text_secondary: light::TEXT_SECONDARY,
        border: light::BORDER,
        accent: light::ACCENT,
        on_accent: light::ON_ACCENT,
    };

    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Dark => Self::DARK,
            ThemePreference::Light => Self::LIGHT,
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Create a semi-transparent version of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Apply brightness and saturation multipliers to a color
///
/// Saturation scales each channel's distance from the color's luma;
/// brightness then scales all channels. Alpha is preserved.
pub fn adjust(color: Color32, brightness: f32, saturation: f32) -> Color32 {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let channels = [r, g, b].map(|c| c as f32 / 255.0);
    let luma = 0.2126 * channels[0] + 0.7152 * channels[1] + 0.0722 * channels[2];
    let [r, g, b] = channels.map(|c| {
        let saturated = luma + (c - luma) * saturation.max(0.0);
        (saturated * brightness.max(0.0)).clamp(0.0, 1.0)
    });
    Color32::from_rgba_unmultiplied(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_adjustment() {
        for color in [ACCENT, light::ACCENT, BG_CARD, Color32::WHITE] {
            assert_eq!(adjust(color, 1.0, 1.0), color);
        }
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let gray = adjust(light::ACCENT, 1.0, 0.0);
        assert_eq!(gray.r(), gray.g());
        assert_eq!(gray.g(), gray.b());
    }

    #[test]
    fn test_brightness_darkens() {
        let dimmed = adjust(Color32::from_rgb(200, 100, 50), 0.5, 1.0);
        assert_eq!(dimmed, Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_palette_selection() {
        assert_eq!(Palette::for_theme(ThemePreference::Dark).bg_page, BG_PAGE);
        assert_eq!(
            Palette::for_theme(ThemePreference::Light).accent,
            light::ACCENT
        );
    }
}
