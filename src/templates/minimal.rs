//! Minimal: single column, lots of whitespace

use super::components;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "minimal";
const PREFIX: &str = "minimal";

const TOKENS: &[StyleToken] = &[
    StyleToken::Bg,
    StyleToken::TextPrimary,
    StyleToken::TextSecondary,
    StyleToken::Accent,
    StyleToken::Border,
    StyleToken::CardBg,
];

const STYLE: &str = r#"
.minimal {
  --minimal-bg: #ffffff;
  --minimal-text-primary: #111827;
  --minimal-text-secondary: #6b7280;
  --minimal-accent: #2563eb;
  --minimal-border: #e5e7eb;
  --minimal-card-bg: #f9fafb;
  font-family: -apple-system, BlinkMacSystemFont, sans-serif;
  background: var(--minimal-bg);
  color: var(--minimal-text-primary);
  max-width: 44rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
  line-height: 1.7;
}
.minimal header { margin-bottom: 3rem; }
.minimal h1 { font-size: 2.25rem; font-weight: 600; margin: 0; }
.minimal .headline, .minimal .meta { color: var(--minimal-text-secondary); }
.minimal section { padding: 2rem 0; border-top: 1px solid var(--minimal-border); }
.minimal .project-card { background: var(--minimal-card-bg); padding: 1.25rem; margin-bottom: 1rem; border-radius: 0.375rem; }
.minimal a { color: var(--minimal-accent); }
.minimal .skills { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.5rem; }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Minimal",
        description: "Clean single-column layout with generous whitespace",
        thumbnail: "/thumbnails/minimal.png",
        premium: false,
        variation: PaletteVariation::lighten(15),
        tokens: TOKENS,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;
    let sections = [
        components::section(
            ctx,
            "experience",
            "experience",
            "Experience",
            &components::experience_list(ctx, &p.experiences),
        ),
        components::section(
            ctx,
            "projects",
            "projects",
            "Projects",
            &components::project_cards(ctx, &p.projects),
        ),
        components::section(
            ctx,
            "skills",
            "skills",
            "Skills",
            &components::skill_list(ctx, &p.skills),
        ),
        components::section(
            ctx,
            "education",
            "education",
            "Education",
            &components::education_list(ctx, &p.educations),
        ),
    ];

    format!(
        "<main class=\"minimal\">\n{}\n{}\n<footer>{}</footer>\n</main>",
        components::hero(ctx, &p.content, "hero"),
        sections.join("\n"),
        components::social_links(ctx, &p.socials)
    )
}
