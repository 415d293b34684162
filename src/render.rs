//! Portfolio rendering
//!
//! Resolution runs in one synchronous pass:
//! 1. take the current options entry from the portfolio
//! 2. resolve options (theme id: payload, then hint, then registry default)
//! 3. look up the template, falling back to the registry default
//! 4. derive the palette with the template's variation
//! 5. customize the template's style sheet
//! 6. hand content plus palette and fonts to the template

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::html;
use crate::portfolio::Portfolio;
use crate::theme::font_link::{apply_font, DocumentHead};
use crate::theme::{
    options, ColorPalette, FontPair, StyleContext, TemplateDefinition, TemplateRegistry,
    ThemeOptions,
};

/// Render failures surfaced to callers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Neither the requested nor the default template is registered
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),
}

/// Everything a template receives
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateProps {
    pub portfolio: Portfolio,
    pub theme_id: String,
    pub color_palette: ColorPalette,
    pub fonts: FontPair,
}

/// A resolved template invocation
#[derive(Debug)]
pub struct RenderedPortfolio<'a> {
    pub template: &'a TemplateDefinition,
    pub options: ThemeOptions,
    pub props: TemplateProps,
    /// The template's style sheet with palette and font applied
    pub stylesheet: String,
    context: StyleContext,
}

impl RenderedPortfolio<'_> {
    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    /// Body markup produced by the template
    pub fn body(&self) -> String {
        (self.template.render)(&self.props, &self.context)
    }

    /// Complete HTML document
    pub fn to_page(&self) -> String {
        let portfolio = &self.props.portfolio;
        let mut head = DocumentHead::new(&portfolio.display_title());
        if !portfolio.content.bio.is_empty() {
            let summary: String = portfolio.content.bio.chars().take(160).collect();
            head.add_meta("description", &summary);
        }
        head.add_meta("theme-color", &self.props.color_palette.background);
        apply_font(&mut head, &self.options.font);
        head.add_style(self.context.root_block());
        head.add_style(self.stylesheet.clone());

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{}\">\n{}\n<body>\n{}\n</body>\n</html>\n",
            html::escape(self.template.id),
            head.to_html(),
            self.body()
        )
    }
}

/// Page shown when no template can be resolved
pub fn not_found_page(theme_id: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Theme not found</title></head>\n\
         <body style=\"font-family: sans-serif; padding: 4rem; text-align: center;\">\n\
         <h1>Theme not found</h1>\n<p>The theme \"{}\" is not available.</p>\n</body>\n</html>\n",
        html::escape(theme_id)
    )
}

/// Resolves portfolios against a template registry
#[derive(Debug, Clone)]
pub struct Renderer {
    registry: Arc<TemplateRegistry>,
}

impl Renderer {
    pub fn new(registry: Arc<TemplateRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Resolve options for a portfolio without choosing a template
    pub fn resolve_options(&self, portfolio: &Portfolio, hint: Option<&str>) -> ThemeOptions {
        let hint = hint
            .filter(|h| !h.is_empty())
            .unwrap_or(self.registry.default_id());
        options::resolve(portfolio.current_options(), Some(hint))
    }

    /// Resolve a portfolio to a template invocation
    pub fn render(
        &self,
        portfolio: &Portfolio,
        hint: Option<&str>,
    ) -> Result<RenderedPortfolio<'_>, RenderError> {
        let mut options = self.resolve_options(portfolio, hint);

        let template = self
            .registry
            .get_or_default(&options.theme_id)
            .ok_or_else(|| RenderError::ThemeNotFound(self.registry.default_id().to_string()))?;

        if template.id != options.theme_id {
            debug!(
                "Portfolio {} requested '{}', rendering '{}'",
                portfolio.id, options.theme_id, template.id
            );
            options.theme_id = template.id.to_string();
        }
        options.rederive(template.variation);

        let stylesheet = template
            .style
            .customize(&options.color_palette, &options.font);
        let context = StyleContext::new(options.clone(), template.variation);

        let props = TemplateProps {
            portfolio: portfolio.clone(),
            theme_id: options.theme_id.clone(),
            color_palette: options.color_palette.clone(),
            fonts: options.fonts.clone(),
        };

        Ok(RenderedPortfolio {
            template,
            options,
            props,
            stylesheet,
            context,
        })
    }
}
