//! Template registry
//!
//! Templates are registered once at startup and looked up by id at render
//! time. Registration checks each template's style sheet against the tokens
//! it claims to declare, so a broken template fails the boot rather than
//! rendering unstyled.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::context::StyleContext;
use super::palette::PaletteVariation;
use super::stylesheet::{StyleSheet, StyleSheetError, StyleToken};
use crate::render::TemplateProps;

/// Render function: props and style context in, body markup out
pub type RenderFn = fn(&TemplateProps, &StyleContext) -> String;

/// A registered visual presentation
#[derive(Debug, Clone)]
pub struct TemplateDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    /// Informational; entitlement checks happen elsewhere
    pub premium: bool,
    pub variation: PaletteVariation,
    /// Tokens the style sheet must declare
    pub tokens: &'static [StyleToken],
    pub style: StyleSheet,
    pub render: RenderFn,
}

impl TemplateDefinition {
    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            id: self.id,
            name: self.name,
            description: self.description,
            thumbnail: self.thumbnail,
            premium: self.premium,
        }
    }
}

/// Gallery metadata for a template
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub premium: bool,
}

/// Template registration errors
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{0}' is already registered")]
    DuplicateId(String),

    #[error("template '{id}': {source}")]
    StyleSheet {
        id: String,
        #[source]
        source: StyleSheetError,
    },
}

/// Read-only (after startup) map of templates in registration order
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: IndexMap<&'static str, TemplateDefinition>,
    default_id: String,
}

impl TemplateRegistry {
    /// Create an empty registry
    pub fn new(default_id: &str) -> Self {
        Self {
            templates: IndexMap::new(),
            default_id: default_id.to_string(),
        }
    }

    /// Create a registry holding every built-in template
    pub fn builtin(default_id: &str) -> Result<Self, TemplateError> {
        let mut registry = Self::new(default_id);
        for definition in crate::templates::builtin()? {
            registry.register(definition)?;
        }
        if !registry.contains(default_id) {
            warn!("Default template '{}' is not registered", default_id);
        }
        Ok(registry)
    }

    /// Register a template after validating its style sheet
    pub fn register(&mut self, definition: TemplateDefinition) -> Result<(), TemplateError> {
        if self.templates.contains_key(definition.id) {
            return Err(TemplateError::DuplicateId(definition.id.to_string()));
        }
        definition
            .style
            .validate(definition.tokens)
            .map_err(|source| TemplateError::StyleSheet {
                id: definition.id.to_string(),
                source,
            })?;

        debug!("Registered template {}", definition.id);
        self.templates.insert(definition.id, definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&TemplateDefinition> {
        self.templates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Templates in registration order
    pub fn list(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.templates.values()
    }

    pub fn summaries(&self) -> Vec<TemplateSummary> {
        self.list().map(TemplateDefinition::summary).collect()
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }

    /// Look up `id`, falling back to the default template
    pub fn get_or_default(&self, id: &str) -> Option<&TemplateDefinition> {
        self.get(id).or_else(|| {
            if id != self.default_id {
                warn!("Unknown template '{}', using '{}'", id, self.default_id);
            }
            self.get(&self.default_id)
        })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_stub(_props: &TemplateProps, _ctx: &StyleContext) -> String {
        String::from("<main></main>")
    }

    fn stub(id: &'static str, source: &'static str) -> TemplateDefinition {
        TemplateDefinition {
            id,
            name: "Stub",
            description: "Test template",
            thumbnail: "/thumbnails/stub.png",
            premium: false,
            variation: PaletteVariation::default(),
            tokens: &[StyleToken::Bg, StyleToken::Accent],
            style: StyleSheet::new("stub", source).unwrap(),
            render: render_stub,
        }
    }

    const GOOD: &str = "--stub-bg: #fff; --stub-accent: #00f; font-family: serif;";

    #[test]
    fn test_register_and_lookup() {
        let mut registry = TemplateRegistry::new("a");
        registry.register(stub("a", GOOD)).unwrap();
        registry.register(stub("b", GOOD)).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b").unwrap().id, "b");
        assert!(registry.get("c").is_none());
        assert_eq!(registry.get_or_default("c").unwrap().id, "a");
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = TemplateRegistry::new("z");
        for id in ["z", "a", "m"] {
            registry.register(stub(id, GOOD)).unwrap();
        }
        let ids: Vec<_> = registry.list().map(|t| t.id).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = TemplateRegistry::new("a");
        registry.register(stub("a", GOOD)).unwrap();
        assert!(matches!(
            registry.register(stub("a", GOOD)),
            Err(TemplateError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_missing_token_rejected_at_registration() {
        let mut registry = TemplateRegistry::new("a");
        let err = registry
            .register(stub("a", "--stub-bg: #fff; font-family: serif;"))
            .unwrap_err();
        assert!(err.to_string().contains("--stub-accent"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_default_yields_none() {
        let mut registry = TemplateRegistry::new("gone");
        registry.register(stub("a", GOOD)).unwrap();
        assert!(registry.get_or_default("unknown").is_none());
    }

    #[test]
    fn test_builtin_registry() {
        let registry = TemplateRegistry::builtin("minimal").unwrap();
        let ids: Vec<_> = registry.list().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["minimal", "modern", "creative", "futuristic", "elegant", "dynamic"]
        );
        for template in registry.list() {
            assert_eq!(template.style.declared_tokens(), template.tokens.to_vec());
        }
    }
}
