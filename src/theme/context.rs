//! Style propagation context
//!
//! Holds the resolved options for one portfolio view and exposes them as a
//! consistent set of `--folio-*` CSS variables. Shared template components
//! style themselves through this context instead of literal colors.

use indexmap::IndexMap;

use super::color;
use super::fonts::FontPair;
use super::options::{OptionsPatch, ThemeOptions};
use super::palette::{ColorPalette, PaletteVariation};

/// Prefix of the variables exposed to components
pub const CONTEXT_VAR_PREFIX: &str = "folio";

/// Per-view design system state
#[derive(Debug, Clone)]
pub struct StyleContext {
    options: ThemeOptions,
    variation: PaletteVariation,
}

impl StyleContext {
    /// Wrap options, re-deriving them for the template's variation
    pub fn new(mut options: ThemeOptions, variation: PaletteVariation) -> Self {
        options.rederive(variation);
        Self { options, variation }
    }

    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.options.color_palette
    }

    pub fn fonts(&self) -> &FontPair {
        &self.options.fonts
    }

    /// Apply an editor update; derived fields follow immediately
    pub fn update(&mut self, patch: OptionsPatch) {
        self.options.apply_with(patch, self.variation);
    }

    /// All exposed variables in a stable order
    pub fn variables(&self) -> IndexMap<String, String> {
        let p = self.palette();
        let mut vars = IndexMap::new();
        let mut set = |name: &str, value: String| {
            vars.insert(format!("--{}-{}", CONTEXT_VAR_PREFIX, name), value);
        };

        set("primary", p.primary.clone());
        set("secondary", p.secondary.clone());
        set("background", p.background.clone());
        set("text", p.text.clone());
        set("accent", p.accent.clone());
        set("muted", p.muted.clone());
        set("border", p.border.clone());
        set("card", p.card.clone());
        set(
            "accent-rgb",
            color::rgb_triplet(&p.accent).unwrap_or_else(|| "59, 130, 246".to_string()),
        );
        set("on-accent", color::contrast_text(&p.accent).to_string());
        set("on-background", color::contrast_text(&p.background).to_string());
        set(
            "complement",
            color::complementary(&p.accent).unwrap_or_else(|| p.secondary.clone()),
        );
        set("font-heading", self.fonts().heading.clone());
        set("font-body", self.fonts().body.clone());
        vars
    }

    /// `var(--folio-{name})` reference for component styles
    pub fn var(&self, name: &str) -> String {
        format!("var(--{}-{})", CONTEXT_VAR_PREFIX, name)
    }

    /// `:root` block declaring every variable
    pub fn root_block(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in self.variables() {
            out.push_str(&format!("  {}: {};\n", name, value));
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::options::resolve;
    use crate::theme::presets;
    use serde_json::json;

    #[test]
    fn test_variables_follow_palette() {
        let ctx = StyleContext::new(ThemeOptions::default(), PaletteVariation::default());
        let vars = ctx.variables();

        assert_eq!(vars["--folio-background"], "#ffffff");
        assert_eq!(vars["--folio-accent"], "#3b82f6");
        assert_eq!(vars["--folio-accent-rgb"], "59, 130, 246");
        assert_eq!(vars["--folio-on-accent"], "#ffffff");
        assert_eq!(vars["--folio-on-background"], "#000000");
        assert_eq!(vars["--folio-complement"], "#c47d09");
        assert!(vars["--folio-font-heading"].starts_with("'Inter'"));
        assert_eq!(vars.keys().next().unwrap(), "--folio-primary");
    }

    #[test]
    fn test_update_rederives_with_variation() {
        let raw = json!({"colors": ["#111111", "#222222", "#333333", "#eeeeee", "#808080"]});
        let mut ctx = StyleContext::new(resolve(Some(&raw), None), PaletteVariation::darken(15));
        assert_eq!(ctx.palette().secondary, "#5a5a5a");

        ctx.update(OptionsPatch {
            colors: Some(vec![
                "#111111".into(),
                "#222222".into(),
                "#333333".into(),
                "#eeeeee".into(),
                "#a0a0a0".into(),
            ]),
            ..Default::default()
        });
        assert_eq!(ctx.palette().accent, "#a0a0a0");
        assert_eq!(ctx.palette().secondary, "#7a7a7a");

        ctx.update(OptionsPatch {
            color_theme_id: Some("purple".into()),
            font: Some("lato".into()),
            ..Default::default()
        });
        assert_eq!(*ctx.palette(), presets::get("purple").unwrap().palette());
        assert!(ctx.fonts().body.starts_with("'Lato'"));
    }

    #[test]
    fn test_update_matches_fresh_context() {
        let patch = OptionsPatch {
            color_theme_id: Some("custom".into()),
            colors: Some(vec![
                "#111111".into(),
                "#222222".into(),
                "#333333".into(),
                "#eeeeee".into(),
                "#808080".into(),
            ]),
            ..Default::default()
        };
        let variation = PaletteVariation::lighten(20);

        let mut updated = StyleContext::new(ThemeOptions::default(), variation);
        updated.update(patch.clone());

        let mut options = ThemeOptions::default();
        options.apply(patch);
        let fresh = StyleContext::new(options, variation);
        assert_eq!(updated.options(), fresh.options());
    }

    #[test]
    fn test_root_block() {
        let ctx = StyleContext::new(ThemeOptions::default(), PaletteVariation::default());
        let block = ctx.root_block();
        assert!(block.starts_with(":root {\n"));
        assert!(block.contains("  --folio-border: #e2e8f0;\n"));
        assert!(block.ends_with('}'));
        assert_eq!(ctx.var("accent"), "var(--folio-accent)");
    }
}
