//! Theme options resolution
//!
//! Stored options arrive as whatever the writer produced: an object, a JSON
//! string, or a string holding a JSON string. [`decode_payload`] normalises
//! those into one object; [`resolve`] merges the recognised fields over the
//! defaults and never fails.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::fonts::{FontPair, DEFAULT_FONT_ID};
use super::palette::{self, ColorPalette, PaletteVariation};
use super::presets::{CUSTOM_COLOR_THEME_ID, DEFAULT_COLOR_THEME_ID};

/// Template used when nothing selects one
pub const DEFAULT_THEME_ID: &str = "minimal";

/// Default custom colors: white, near-white, light gray, near-black, blue
pub const DEFAULT_COLORS: [&str; 5] = ["#ffffff", "#f8fafc", "#e2e8f0", "#0f172a", "#3b82f6"];

/// How many string layers a stored payload may be wrapped in
const MAX_DECODE_DEPTH: usize = 3;

/// Errors decoding a stored options payload
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),

    #[error("payload nested more than {0} string layers deep")]
    TooDeep(usize),
}

/// Resolved options for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub theme_id: String,
    pub color_theme_id: String,
    pub colors: Option<Vec<String>>,
    pub font: String,
    pub color_palette: ColorPalette,
    pub fonts: FontPair,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        let mut options = Self {
            theme_id: DEFAULT_THEME_ID.to_string(),
            color_theme_id: DEFAULT_COLOR_THEME_ID.to_string(),
            colors: Some(DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()),
            font: DEFAULT_FONT_ID.to_string(),
            color_palette: ColorPalette::default(),
            fonts: FontPair::for_font(DEFAULT_FONT_ID),
        };
        options.rederive(PaletteVariation::default());
        options
    }
}

impl ThemeOptions {
    /// Merge a partial update and re-derive palette and fonts
    pub fn apply(&mut self, patch: OptionsPatch) {
        self.apply_with(patch, PaletteVariation::default());
    }

    /// Merge a partial update and re-derive for a template's palette variation
    pub fn apply_with(&mut self, patch: OptionsPatch, variation: PaletteVariation) {
        let patch = patch.normalized();

        if let Some(theme_id) = patch.theme_id {
            self.theme_id = theme_id;
        }
        if let Some(color_theme_id) = patch.color_theme_id {
            self.color_theme_id = color_theme_id;
        }
        if let Some(colors) = patch.colors {
            self.colors = Some(colors);
        }
        if let Some(font) = patch.font {
            self.font = font;
        }

        self.rederive(variation);
    }

    /// Recompute the derived fields for a template's palette variation
    pub fn rederive(&mut self, variation: PaletteVariation) {
        self.color_palette = palette::derive(self, variation);
        self.fonts = FontPair::for_font(&self.font);
    }

    /// Whether the custom color set drives the palette
    pub fn uses_custom_colors(&self) -> bool {
        self.color_theme_id == CUSTOM_COLOR_THEME_ID
    }
}

/// Partial options update, as sent by an editor or stored per portfolio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl OptionsPatch {
    /// Pick recognised fields out of an object, skipping any with the wrong shape
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            theme_id: non_empty_string(object, "themeId"),
            color_theme_id: non_empty_string(object, "colorThemeId"),
            colors: string_array(object, "colors"),
            font: non_empty_string(object, "font"),
        }
    }

    /// Resolve the legacy shape: `colors` without `colorThemeId`.
    ///
    /// A complete set of hex colors selects the custom theme. Anything else
    /// is dropped so the current color theme stays in effect.
    pub fn normalized(mut self) -> Self {
        if self.color_theme_id.is_none() {
            match self.colors.as_deref() {
                Some(colors) if palette::is_complete_custom(colors) => {
                    self.color_theme_id = Some(CUSTOM_COLOR_THEME_ID.to_string());
                }
                Some(colors) => {
                    debug!("Ignoring incomplete legacy colors: {:?}", colors);
                    self.colors = None;
                }
                None => {}
            }
        }
        self
    }

    /// Write the present fields into a stored options object, with the same
    /// legacy handling as [`ThemeOptions::apply`]
    pub fn merge_into(&self, object: &mut Map<String, Value>) {
        let patch = self.clone().normalized();
        if let Some(theme_id) = &patch.theme_id {
            object.insert("themeId".into(), Value::String(theme_id.clone()));
        }
        if let Some(color_theme_id) = &patch.color_theme_id {
            object.insert("colorThemeId".into(), Value::String(color_theme_id.clone()));
        }
        if let Some(colors) = &patch.colors {
            object.insert(
                "colors".into(),
                Value::Array(colors.iter().cloned().map(Value::String).collect()),
            );
        }
        if let Some(font) = &patch.font {
            object.insert("font".into(), Value::String(font.clone()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.theme_id.is_none()
            && self.color_theme_id.is_none()
            && self.colors.is_none()
            && self.font.is_none()
    }
}

fn non_empty_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Null => None,
        other => {
            debug!("Ignoring options field '{}': {}", key, other);
            None
        }
    }
}

fn string_array(object: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let Value::Array(items) = object.get(key)? else {
        debug!("Ignoring options field '{}': not an array", key);
        return None;
    };
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .or_else(|| {
            debug!("Ignoring options field '{}': non-string entry", key);
            None
        })
}

/// Normalise a stored payload into a single JSON object.
///
/// Accepts an object, a JSON string, or a JSON string wrapped in further
/// string layers. `null` decodes to an empty object.
pub fn decode_payload(raw: &Value) -> Result<Map<String, Value>, PayloadError> {
    let mut current = raw.clone();
    for _ in 0..=MAX_DECODE_DEPTH {
        current = match current {
            Value::Object(map) => return Ok(map),
            Value::Null => return Ok(Map::new()),
            Value::String(s) => serde_json::from_str(&s)?,
            Value::Bool(_) => return Err(PayloadError::NotAnObject("boolean")),
            Value::Number(_) => return Err(PayloadError::NotAnObject("number")),
            Value::Array(_) => return Err(PayloadError::NotAnObject("array")),
        };
    }
    Err(PayloadError::TooDeep(MAX_DECODE_DEPTH))
}

/// Resolve options from a raw payload and an optional theme id hint.
///
/// The theme id comes from the payload first, then `hint`, then
/// [`DEFAULT_THEME_ID`]. Undecodable payloads are logged and treated as empty.
pub fn resolve(raw: Option<&Value>, hint: Option<&str>) -> ThemeOptions {
    let patch = match raw.map(decode_payload) {
        Some(Ok(object)) => OptionsPatch::from_object(&object),
        Some(Err(e)) => {
            warn!("Malformed theme options, using defaults: {}", e);
            OptionsPatch::default()
        }
        None => OptionsPatch::default(),
    };

    let mut options = ThemeOptions::default();
    if patch.theme_id.is_none() {
        if let Some(hint) = hint.filter(|h| !h.is_empty()) {
            options.theme_id = hint.to_string();
        }
    }
    options.apply(patch);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets;
    use serde_json::json;

    #[test]
    fn test_absent_payload_is_default() {
        let options = resolve(None, None);
        assert_eq!(options, ThemeOptions::default());
        assert_eq!(options.theme_id, DEFAULT_THEME_ID);
        assert_eq!(options.color_palette, presets::get("light").unwrap().palette());
    }

    #[test]
    fn test_malformed_payloads_are_default() {
        let malformed = [
            json!("{not json"),
            json!("[1, 2, 3]"),
            json!(42),
            json!(true),
            json!(["a", "b"]),
            json!(""),
            json!(null),
            json!({}),
        ];
        for raw in malformed {
            assert_eq!(resolve(Some(&raw), None), ThemeOptions::default(), "{}", raw);
        }
    }

    #[test]
    fn test_string_and_object_payloads_agree() {
        let object = json!({"themeId": "modern", "colorThemeId": "dark", "font": "roboto"});
        let string = Value::String(object.to_string());
        let double = Value::String(string.to_string());

        let a = resolve(Some(&object), None);
        assert_eq!(a.theme_id, "modern");
        assert_eq!(a.color_theme_id, "dark");
        assert_eq!(a.font, "roboto");
        assert_eq!(a, resolve(Some(&string), None));
        assert_eq!(a, resolve(Some(&double), None));
    }

    #[test]
    fn test_theme_id_precedence() {
        let with_id = json!({"themeId": "elegant"});
        assert_eq!(resolve(Some(&with_id), Some("modern")).theme_id, "elegant");

        let without_id = json!({"font": "lato"});
        assert_eq!(resolve(Some(&without_id), Some("modern")).theme_id, "modern");
        assert_eq!(resolve(Some(&without_id), None).theme_id, DEFAULT_THEME_ID);
        assert_eq!(resolve(None, Some("creative")).theme_id, "creative");
    }

    #[test]
    fn test_legacy_colors_resolve_as_custom() {
        let raw = json!(
            r##"{"themeId":"modern","colors":["#111111","#222222","#333333","#eeeeee","#ff0000"]}"##
        );
        let options = resolve(Some(&raw), None);

        assert_eq!(options.theme_id, "modern");
        assert!(options.uses_custom_colors());
        assert_eq!(options.color_palette.background, "#111111");
        assert_eq!(options.color_palette.text, "#eeeeee");
        assert_eq!(options.color_palette.accent, "#ff0000");
        assert_ne!(options.color_palette.secondary, "#ff0000");
    }

    #[test]
    fn test_incomplete_legacy_colors_keep_light() {
        let short = json!({"colors": ["#111111", "#222222", "#333333", "#eeeeee"]});
        let not_hex = json!({"colors": ["#111111", "#222222", "#333333", "#eeeeee", "red"]});
        for raw in [short, not_hex] {
            let options = resolve(Some(&raw), None);
            assert_eq!(options.color_theme_id, "light", "{}", raw);
            assert_eq!(options.color_palette, ThemeOptions::default().color_palette);
        }
    }

    #[test]
    fn test_explicit_custom_with_incomplete_colors_uses_custom_entry() {
        let raw = json!({"colorThemeId": "custom", "colors": ["#111111"]});
        let options = resolve(Some(&raw), None);
        assert!(options.uses_custom_colors());
        assert_eq!(options.color_palette, presets::get("custom").unwrap().palette());
    }

    #[test]
    fn test_wrong_typed_fields_ignored() {
        let raw = json!({"themeId": 7, "colorThemeId": "dark", "colors": "red", "font": null});
        let options = resolve(Some(&raw), None);
        assert_eq!(options.theme_id, DEFAULT_THEME_ID);
        assert_eq!(options.color_theme_id, "dark");
        assert_eq!(options.font, DEFAULT_FONT_ID);
        assert_eq!(options.color_palette, presets::get("dark").unwrap().palette());
    }

    #[test]
    fn test_apply_patch() {
        let mut options = ThemeOptions::default();
        options.apply(OptionsPatch {
            color_theme_id: Some("green".into()),
            font: Some("playfair".into()),
            ..Default::default()
        });
        assert_eq!(options.color_palette, presets::get("green").unwrap().palette());
        assert!(options.fonts.heading.contains("Playfair Display"));
    }

    #[test]
    fn test_patch_merge_into_object() {
        let mut stored = json!({"themeId": "minimal", "font": "lato"})
            .as_object()
            .cloned()
            .unwrap();
        let patch = OptionsPatch {
            theme_id: Some("dynamic".into()),
            ..Default::default()
        };
        patch.merge_into(&mut stored);
        assert_eq!(stored["themeId"], "dynamic");
        assert_eq!(stored["font"], "lato");
        assert!(OptionsPatch::default().is_empty());
    }

    #[test]
    fn test_merge_into_matches_apply_for_legacy_colors() {
        let colors: Vec<String> = ["#101010", "#202020", "#303030", "#f0f0f0", "#ff0000"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let patch = OptionsPatch {
            colors: Some(colors),
            ..Default::default()
        };

        let mut stored = json!({"colorThemeId": "dark"}).as_object().cloned().unwrap();
        patch.merge_into(&mut stored);
        assert_eq!(stored["colorThemeId"], "custom");

        let mut applied = resolve(Some(&json!({"colorThemeId": "dark"})), None);
        applied.apply(patch);
        let from_store = resolve(Some(&Value::Object(stored)), None);
        assert_eq!(from_store.color_palette, applied.color_palette);
        assert_eq!(from_store.color_palette.accent, "#ff0000");
    }

    #[test]
    fn test_merge_into_drops_incomplete_legacy_colors() {
        let mut stored = json!({"colorThemeId": "dark"}).as_object().cloned().unwrap();
        OptionsPatch {
            colors: Some(vec!["#101010".into()]),
            ..Default::default()
        }
        .merge_into(&mut stored);
        assert_eq!(stored["colorThemeId"], "dark");
        assert!(stored.get("colors").is_none());
    }

    #[test]
    fn test_decode_depth_limit() {
        let mut raw = json!({"themeId": "modern"});
        for _ in 0..=MAX_DECODE_DEPTH + 1 {
            raw = Value::String(raw.to_string());
        }
        assert!(matches!(decode_payload(&raw), Err(PayloadError::TooDeep(_))));
    }
}
