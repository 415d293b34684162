//! Built-in portfolio templates
//!
//! Each template pairs a base style sheet (declaring `--{prefix}-{token}`
//! values) with a render function. Registration order here is gallery order.

pub mod components;
mod creative;
mod dynamic;
mod elegant;
mod futuristic;
mod minimal;
mod modern;

use crate::theme::{StyleSheetError, TemplateDefinition, TemplateError};

type Builder = fn() -> Result<TemplateDefinition, StyleSheetError>;

const BUILDERS: [(&str, Builder); 6] = [
    (minimal::ID, minimal::definition),
    (modern::ID, modern::definition),
    (creative::ID, creative::definition),
    (futuristic::ID, futuristic::definition),
    (elegant::ID, elegant::definition),
    (dynamic::ID, dynamic::definition),
];

/// Build every built-in template definition
pub fn builtin() -> Result<Vec<TemplateDefinition>, TemplateError> {
    BUILDERS
        .iter()
        .map(|(id, build)| {
            build().map_err(|source| TemplateError::StyleSheet {
                id: id.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Portfolio;
    use crate::render::TemplateProps;
    use crate::theme::{PaletteVariation, StyleContext, ThemeOptions};
    use serde_json::json;

    fn sample() -> Portfolio {
        serde_json::from_value(json!({
            "id": "p1",
            "content": {
                "name": "Grace Hopper",
                "headline": "Rear Admiral",
                "bio": "Compiler pioneer.",
                "email": "grace@example.com",
                "location": "Arlington"
            },
            "experiences": [{"company": "Navy", "role": "Programmer", "startDate": "1943"}],
            "educations": [{"school": "Yale", "degree": "PhD", "field": "Mathematics", "startDate": "1930", "endDate": "1934"}],
            "skills": [{"name": "COBOL", "level": 95, "category": "Languages"}],
            "projects": [{"title": "A-0", "description": "First compiler", "tags": ["compilers"]}],
            "socials": [{"platform": "Website", "url": "https://example.com"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_builtin_ids_unique_and_ordered() {
        let templates = builtin().unwrap();
        let ids: Vec<_> = templates.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec!["minimal", "modern", "creative", "futuristic", "elegant", "dynamic"]
        );
    }

    #[test]
    fn test_every_template_renders_content() {
        for template in builtin().unwrap() {
            let options = ThemeOptions::default();
            let ctx = StyleContext::new(options.clone(), template.variation);
            let props = TemplateProps {
                portfolio: sample(),
                theme_id: template.id.to_string(),
                color_palette: ctx.palette().clone(),
                fonts: ctx.fonts().clone(),
            };
            let body = (template.render)(&props, &ctx);

            for expected in [
                "Grace Hopper",
                "A-0",
                "Programmer",
                "Yale",
                "COBOL",
                "https://example.com",
            ] {
                assert!(body.contains(expected), "{} missing {}", template.id, expected);
            }
        }
    }

    #[test]
    fn test_every_template_customizes() {
        let ctx = StyleContext::new(ThemeOptions::default(), PaletteVariation::default());
        for template in builtin().unwrap() {
            let sheet = template.style.customize(ctx.palette(), "roboto");
            let bg = format!("--{}-bg: #ffffff;", template.style.prefix());
            assert!(sheet.contains(&bg), "{}", template.id);
            assert!(sheet.contains("font-family: 'Roboto'"), "{}", template.id);
            assert!(sheet.starts_with("@import url("), "{}", template.id);
        }
    }
}
