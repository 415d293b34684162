//! Preset palette table
//!
//! Named color themes selectable without supplying custom colors.

use serde::Serialize;

use super::palette::ColorPalette;

/// Color theme used when nothing else resolves
pub const DEFAULT_COLOR_THEME_ID: &str = "light";

/// Color theme id that selects the user's own five colors
pub const CUSTOM_COLOR_THEME_ID: &str = "custom";

/// A named preset palette
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub card: &'static str,
}

impl Preset {
    /// Owned palette for this preset
    pub fn palette(&self) -> ColorPalette {
        ColorPalette {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            background: self.background.to_string(),
            text: self.text.to_string(),
            accent: self.accent.to_string(),
            muted: self.muted.to_string(),
            border: self.border.to_string(),
            card: self.card.to_string(),
        }
    }
}

/// Presets in display order
pub static PRESETS: &[Preset] = &[
    Preset {
        id: "light",
        name: "Light",
        primary: "#3b82f6",
        secondary: "#60a5fa",
        background: "#ffffff",
        text: "#0f172a",
        accent: "#3b82f6",
        muted: "#64748b",
        border: "#e2e8f0",
        card: "#f8fafc",
    },
    Preset {
        id: "dark",
        name: "Dark",
        primary: "#60a5fa",
        secondary: "#93c5fd",
        background: "#0f172a",
        text: "#f1f5f9",
        accent: "#60a5fa",
        muted: "#94a3b8",
        border: "#334155",
        card: "#1e293b",
    },
    Preset {
        id: "blue",
        name: "Ocean Blue",
        primary: "#1d4ed8",
        secondary: "#3b82f6",
        background: "#eff6ff",
        text: "#1e3a8a",
        accent: "#2563eb",
        muted: "#64748b",
        border: "#bfdbfe",
        card: "#dbeafe",
    },
    Preset {
        id: "green",
        name: "Forest Green",
        primary: "#15803d",
        secondary: "#22c55e",
        background: "#f0fdf4",
        text: "#14532d",
        accent: "#16a34a",
        muted: "#6b7280",
        border: "#bbf7d0",
        card: "#dcfce7",
    },
    Preset {
        id: "purple",
        name: "Royal Purple",
        primary: "#7e22ce",
        secondary: "#a855f7",
        background: "#faf5ff",
        text: "#3b0764",
        accent: "#9333ea",
        muted: "#6b7280",
        border: "#e9d5ff",
        card: "#f3e8ff",
    },
    Preset {
        id: "orange",
        name: "Sunset Orange",
        primary: "#c2410c",
        secondary: "#f97316",
        background: "#fff7ed",
        text: "#431407",
        accent: "#ea580c",
        muted: "#78716c",
        border: "#fed7aa",
        card: "#ffedd5",
    },
    // Neutral stand-in used when "custom" is selected without a usable color set
    Preset {
        id: "custom",
        name: "Custom",
        primary: "#3b82f6",
        secondary: "#61a8ff",
        background: "#ffffff",
        text: "#0f172a",
        accent: "#3b82f6",
        muted: "#0f172a99",
        border: "#e2e8f0",
        card: "#f8fafc",
    },
];

/// Look up a preset by id
pub fn get(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// The fallback preset
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}
