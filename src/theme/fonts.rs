//! Font catalog
//!
//! Maps font identifiers to CSS font stacks and remote font resources.
//! Every stack ends in system fallbacks so a failed remote fetch only
//! degrades typography.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Built-in default font; never needs a remote import
pub const DEFAULT_FONT_ID: &str = "inter";

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    /// Identifier stored in theme options
    pub id: &'static str,
    /// Human-readable family name
    pub name: &'static str,
    /// CSS `font-family` value
    pub stack: &'static str,
    /// Remote stylesheet that loads the family
    pub url: &'static str,
}

impl FontSpec {
    /// Whether this is the built-in default font
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_FONT_ID
    }
}

/// All known fonts; the first entry is the default
pub static FONTS: &[FontSpec] = &[
    FontSpec {
        id: "inter",
        name: "Inter",
        stack: "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap",
    },
    FontSpec {
        id: "roboto",
        name: "Roboto",
        stack: "'Roboto', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap",
    },
    FontSpec {
        id: "open-sans",
        name: "Open Sans",
        stack: "'Open Sans', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;600;700&display=swap",
    },
    FontSpec {
        id: "lato",
        name: "Lato",
        stack: "'Lato', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Lato:wght@400;700&display=swap",
    },
    FontSpec {
        id: "montserrat",
        name: "Montserrat",
        stack: "'Montserrat', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;500;600;700&display=swap",
    },
    FontSpec {
        id: "poppins",
        name: "Poppins",
        stack: "'Poppins', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
        url: "https://fonts.googleapis.com/css2?family=Poppins:wght@400;500;600;700&display=swap",
    },
    FontSpec {
        id: "playfair",
        name: "Playfair Display",
        stack: "'Playfair Display', Georgia, 'Times New Roman', serif",
        url: "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700&display=swap",
    },
    FontSpec {
        id: "merriweather",
        name: "Merriweather",
        stack: "'Merriweather', Georgia, 'Times New Roman', serif",
        url: "https://fonts.googleapis.com/css2?family=Merriweather:wght@400;700&display=swap",
    },
    FontSpec {
        id: "fira-code",
        name: "Fira Code",
        stack: "'Fira Code', 'SFMono-Regular', Menlo, Consolas, monospace",
        url: "https://fonts.googleapis.com/css2?family=Fira+Code:wght@400;500;600&display=swap",
    },
];

/// Look up a font by identifier
pub fn lookup(id: &str) -> Option<&'static FontSpec> {
    FONTS.iter().find(|f| f.id == id)
}

/// Look up a font, falling back to the default for unknown identifiers
pub fn resolve(id: &str) -> &'static FontSpec {
    lookup(id).unwrap_or_else(|| {
        debug!("Unknown font '{}', using {}", id, DEFAULT_FONT_ID);
        default_font()
    })
}

/// The built-in default font
pub fn default_font() -> &'static FontSpec {
    &FONTS[0]
}

/// Font stack for an identifier (default stack for unknown ids)
pub fn font_stack(id: &str) -> &'static str {
    resolve(id).stack
}

/// Remote resource for an identifier, `None` for the default font
pub fn font_url(id: &str) -> Option<&'static str> {
    let font = resolve(id);
    (!font.is_default()).then_some(font.url)
}

/// Resolved heading/body font stacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub heading: String,
    pub body: String,
}

impl FontPair {
    /// Both roles use the selected family
    pub fn for_font(id: &str) -> Self {
        let stack = font_stack(id);
        Self {
            heading: stack.to_string(),
            body: stack.to_string(),
        }
    }
}
