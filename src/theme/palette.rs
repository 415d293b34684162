//! Palette derivation
//!
//! Turns the user's color choice (a named preset, or five custom colors) into
//! the full 8-field palette templates consume.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::color::{self, MUTED_ALPHA_SUFFIX};
use super::options::ThemeOptions;
use super::presets::{self, CUSTOM_COLOR_THEME_ID};

/// Number of entries in a custom color set
pub const CUSTOM_COLOR_COUNT: usize = 5;

/// Fully resolved colors for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
    pub muted: String,
    pub border: String,
    pub card: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        presets::default_preset().palette()
    }
}

/// Per-template stylistic variation applied during derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteVariation {
    /// Percentage the accent is shifted by to produce `secondary`.
    /// Positive lightens, negative darkens.
    pub secondary_shift: i32,
}

impl PaletteVariation {
    pub const fn lighten(percent: i32) -> Self {
        Self {
            secondary_shift: percent,
        }
    }

    pub const fn darken(percent: i32) -> Self {
        Self {
            secondary_shift: -percent,
        }
    }
}

impl Default for PaletteVariation {
    fn default() -> Self {
        Self::lighten(15)
    }
}

/// Derive the palette for resolved options
pub fn derive(options: &ThemeOptions, variation: PaletteVariation) -> ColorPalette {
    derive_from(&options.color_theme_id, options.colors.as_deref(), variation)
}

/// Derive a palette from a color theme id and optional custom colors.
///
/// Custom colors are only used when `color_theme_id` is `"custom"` and the set
/// has exactly five valid hex entries. Otherwise the preset table decides,
/// falling back to the default preset for unknown ids.
pub fn derive_from(
    color_theme_id: &str,
    colors: Option<&[String]>,
    variation: PaletteVariation,
) -> ColorPalette {
    if color_theme_id == CUSTOM_COLOR_THEME_ID {
        match colors.and_then(|c| from_custom(c, variation)) {
            Some(palette) => return palette,
            None => debug!("Custom color set unusable, using custom preset"),
        }
    }

    presets::get(color_theme_id)
        .unwrap_or_else(|| {
            debug!("Unknown color theme '{}'", color_theme_id);
            presets::default_preset()
        })
        .palette()
}

/// Whether `colors` is a complete set of valid hex colors
pub fn is_complete_custom(colors: &[String]) -> bool {
    colors.len() == CUSTOM_COLOR_COUNT && colors.iter().all(|c| color::is_hex(c))
}

/// Build a palette from the positional custom colors
/// `[background, section background, border, text, accent]`.
pub fn from_custom(colors: &[String], variation: PaletteVariation) -> Option<ColorPalette> {
    if !is_complete_custom(colors) {
        return None;
    }
    let [background, section, border, text, accent] = colors else {
        return None;
    };

    let secondary = color::shift(accent, variation.secondary_shift)?;
    let muted = color::with_alpha(text, MUTED_ALPHA_SUFFIX)?;

    Some(ColorPalette {
        primary: accent.clone(),
        secondary,
        background: background.clone(),
        text: text.clone(),
        accent: accent.clone(),
        muted,
        border: border.clone(),
        card: section.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_custom_positions() {
        let set = colors(&["#111111", "#222222", "#333333", "#eeeeee", "#ff0000"]);
        let p = derive_from("custom", Some(&set), PaletteVariation::default());

        assert_eq!(p.background, "#111111");
        assert_eq!(p.card, "#222222");
        assert_eq!(p.border, "#333333");
        assert_eq!(p.text, "#eeeeee");
        assert_eq!(p.accent, "#ff0000");
        assert_eq!(p.primary, "#ff0000");
        assert_eq!(p.secondary, "#ff2626");
        assert_eq!(p.muted, "#eeeeee99");
    }

    #[test]
    fn test_variation_sign() {
        let set = colors(&["#111111", "#222222", "#333333", "#eeeeee", "#808080"]);
        let light = derive_from("custom", Some(&set), PaletteVariation::lighten(15));
        let dark = derive_from("custom", Some(&set), PaletteVariation::darken(15));

        assert_eq!(light.secondary, "#a6a6a6");
        assert_eq!(dark.secondary, "#5a5a5a");
    }

    #[test]
    fn test_presets_ignore_colors() {
        let set = colors(&["#111111", "#222222", "#333333", "#eeeeee", "#ff0000"]);
        for preset in presets::PRESETS.iter().filter(|p| p.id != "custom") {
            let p = derive_from(preset.id, Some(&set), PaletteVariation::default());
            assert_eq!(p, preset.palette());
        }
    }

    #[test]
    fn test_incomplete_custom_uses_custom_preset() {
        let short = colors(&["#111111", "#222222", "#333333", "#eeeeee"]);
        let p = derive_from("custom", Some(&short), PaletteVariation::default());
        assert_eq!(p, presets::get("custom").unwrap().palette());

        let p = derive_from("custom", None, PaletteVariation::default());
        assert_eq!(p, presets::get("custom").unwrap().palette());
    }

    #[test]
    fn test_invalid_hex_rejected() {
        let bad = colors(&["#111111", "#222222", "red", "#eeeeee", "#ff0000"]);
        assert!(from_custom(&bad, PaletteVariation::default()).is_none());
    }

    #[test]
    fn test_unknown_preset_falls_back_to_light() {
        let p = derive_from("neon", None, PaletteVariation::default());
        assert_eq!(p, presets::default_preset().palette());
    }
}
