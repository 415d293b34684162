//! Style sheet customization
//!
//! A template ships a static style sheet that declares its customizable values
//! as `--{prefix}-{name}: <value>;`, plus one or more `font-family: <value>;`
//! declarations. Customization rewrites those declarations with values derived
//! from the resolved palette and font. Nothing else in the sheet is parsed.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use thiserror::Error;
use tracing::warn;

use super::color;
use super::fonts::{self, FontSpec};
use super::palette::ColorPalette;

static FONT_FAMILY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-family\s*:[^;{}]*;").unwrap());

/// A customizable value a template may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleToken {
    Bg,
    TextPrimary,
    TextSecondary,
    Accent,
    AccentLight,
    Border,
    CardBg,
    SectionBg,
    Gradient,
}

impl StyleToken {
    pub const ALL: [StyleToken; 9] = [
        StyleToken::Bg,
        StyleToken::TextPrimary,
        StyleToken::TextSecondary,
        StyleToken::Accent,
        StyleToken::AccentLight,
        StyleToken::Border,
        StyleToken::CardBg,
        StyleToken::SectionBg,
        StyleToken::Gradient,
    ];

    /// Variable name without prefix
    pub fn name(&self) -> &'static str {
        match self {
            StyleToken::Bg => "bg",
            StyleToken::TextPrimary => "text-primary",
            StyleToken::TextSecondary => "text-secondary",
            StyleToken::Accent => "accent",
            StyleToken::AccentLight => "accent-light",
            StyleToken::Border => "border",
            StyleToken::CardBg => "card-bg",
            StyleToken::SectionBg => "section-bg",
            StyleToken::Gradient => "gradient",
        }
    }

    /// Value used when the palette cannot supply one
    pub fn fallback(&self) -> &'static str {
        match self {
            StyleToken::Bg => "#ffffff",
            StyleToken::TextPrimary => "#0f172a",
            StyleToken::TextSecondary => "#64748b",
            StyleToken::Accent => "#3b82f6",
            StyleToken::AccentLight => "#60a5fa",
            StyleToken::Border => "#e2e8f0",
            StyleToken::CardBg => "#f8fafc",
            StyleToken::SectionBg => "rgba(59, 130, 246, 0.05)",
            StyleToken::Gradient => "linear-gradient(135deg, #3b82f6 0%, #60a5fa 100%)",
        }
    }

    /// Full variable name, e.g. `--modern-bg`
    pub fn variable(&self, prefix: &str) -> String {
        format!("--{}-{}", prefix, self.name())
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved value for every token
pub type TokenValues = BTreeMap<StyleToken, String>;

/// Compute token values from a palette
pub fn token_values(palette: &ColorPalette) -> TokenValues {
    fn pick(value: &str, token: StyleToken) -> String {
        if value.trim().is_empty() {
            token.fallback().to_string()
        } else {
            value.to_string()
        }
    }

    let accent = pick(&palette.accent, StyleToken::Accent);
    let accent_light = pick(&palette.secondary, StyleToken::AccentLight);
    let section_bg = color::rgba(&accent, 0.05)
        .unwrap_or_else(|| StyleToken::SectionBg.fallback().to_string());
    let gradient = if color::is_hex(&accent) && color::is_hex(&accent_light) {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            accent, accent_light
        )
    } else {
        StyleToken::Gradient.fallback().to_string()
    };

    let mut values = TokenValues::new();
    values.insert(StyleToken::Bg, pick(&palette.background, StyleToken::Bg));
    values.insert(StyleToken::TextPrimary, pick(&palette.text, StyleToken::TextPrimary));
    values.insert(StyleToken::TextSecondary, pick(&palette.muted, StyleToken::TextSecondary));
    values.insert(StyleToken::Accent, accent);
    values.insert(StyleToken::AccentLight, accent_light);
    values.insert(StyleToken::Border, pick(&palette.border, StyleToken::Border));
    values.insert(StyleToken::CardBg, pick(&palette.card, StyleToken::CardBg));
    values.insert(StyleToken::SectionBg, section_bg);
    values.insert(StyleToken::Gradient, gradient);
    values
}

/// Remote font import line prepended for non-default fonts
pub fn font_import(font: &FontSpec) -> String {
    format!("@import url('{}');", font.url)
}

/// Style sheet contract violations, caught when a template is registered
#[derive(Debug, Error)]
pub enum StyleSheetError {
    #[error("style sheet does not declare {0}")]
    MissingToken(String),

    #[error("style sheet has no font-family declaration")]
    MissingFontFamily,

    #[error("invalid variable prefix '{0}'")]
    InvalidPrefix(String),

    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

fn declaration_pattern(prefix: &str, token: StyleToken) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"({}\s*:)[^;{{}}]*;",
        regex::escape(&token.variable(prefix))
    ))
}

fn substitute(sheet: &str, pattern: &Regex, value: &str) -> String {
    pattern
        .replace_all(sheet, |caps: &Captures| format!("{} {};", &caps[1], value))
        .into_owned()
}

fn apply_font(sheet: String, font: &FontSpec) -> String {
    let declaration = format!("font-family: {};", font.stack);
    let sheet = FONT_FAMILY_REGEX
        .replace_all(&sheet, NoExpand(&declaration))
        .into_owned();

    if font.is_default() {
        return sheet;
    }
    let import = font_import(font);
    if sheet.starts_with(&import) {
        sheet
    } else {
        format!("{}\n{}", import, sheet)
    }
}

/// Rewrite a base style sheet with palette and font values.
///
/// Declarations the sheet does not contain are skipped silently. Applying the
/// same inputs to the output again yields the same string.
pub fn customize(base: &str, palette: &ColorPalette, font_id: &str, prefix: &str) -> String {
    let values = token_values(palette);
    let mut sheet = base.to_string();

    for token in StyleToken::ALL {
        let pattern = match declaration_pattern(prefix, token) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping {}: {}", token.variable(prefix), e);
                continue;
            }
        };
        if let Some(value) = values.get(&token) {
            sheet = substitute(&sheet, &pattern, value);
        }
    }

    apply_font(sheet, fonts::resolve(font_id))
}

/// A template's base style sheet with its declared tokens
#[derive(Debug, Clone)]
pub struct StyleSheet {
    prefix: String,
    source: &'static str,
    declared: Vec<(StyleToken, Regex)>,
}

impl StyleSheet {
    /// Scan `source` for the tokens it declares under `prefix`
    pub fn new(prefix: &str, source: &'static str) -> Result<Self, StyleSheetError> {
        if prefix.is_empty()
            || !prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(StyleSheetError::InvalidPrefix(prefix.to_string()));
        }

        let mut declared = Vec::new();
        for token in StyleToken::ALL {
            let pattern = declaration_pattern(prefix, token)?;
            if pattern.is_match(source) {
                declared.push((token, pattern));
            }
        }

        Ok(Self {
            prefix: prefix.to_string(),
            source,
            declared,
        })
    }

    /// Require the listed tokens and a font-family declaration
    pub fn validate(&self, required: &[StyleToken]) -> Result<(), StyleSheetError> {
        for token in required {
            if !self.declares(*token) {
                return Err(StyleSheetError::MissingToken(token.variable(&self.prefix)));
            }
        }
        if !FONT_FAMILY_REGEX.is_match(self.source) {
            return Err(StyleSheetError::MissingFontFamily);
        }
        Ok(())
    }

    pub fn declares(&self, token: StyleToken) -> bool {
        self.declared.iter().any(|(t, _)| *t == token)
    }

    pub fn declared_tokens(&self) -> Vec<StyleToken> {
        self.declared.iter().map(|(t, _)| *t).collect()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Customize using the declared token list
    pub fn customize(&self, palette: &ColorPalette, font_id: &str) -> String {
        let values = token_values(palette);
        let mut sheet = self.source.to_string();
        for (token, pattern) in &self.declared {
            if let Some(value) = values.get(token) {
                sheet = substitute(&sheet, pattern, value);
            }
        }
        apply_font(sheet, fonts::resolve(font_id))
    }
}
