//! Elegant: centered serif layout with a timeline

use super::components;
use crate::html::escape;
use crate::portfolio::Experience;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "elegant";
const PREFIX: &str = "elegant";

const TOKENS: &[StyleToken] = &[
    StyleToken::Bg,
    StyleToken::TextPrimary,
    StyleToken::TextSecondary,
    StyleToken::Accent,
    StyleToken::AccentLight,
    StyleToken::Border,
    StyleToken::CardBg,
    StyleToken::SectionBg,
];

const STYLE: &str = r#"
.elegant {
  --elegant-bg: #fdfcf9;
  --elegant-text-primary: #292524;
  --elegant-text-secondary: #857a6d;
  --elegant-accent: #a16207;
  --elegant-accent-light: #ca8a04;
  --elegant-border: #e7e0d3;
  --elegant-card-bg: #ffffff;
  --elegant-section-bg: #f7f3ea;
  font-family: Georgia, 'Times New Roman', serif;
  background: var(--elegant-bg);
  color: var(--elegant-text-primary);
  text-align: center;
}
.elegant .frame { max-width: 50rem; margin: 0 auto; padding: 5rem 2rem; }
.elegant h1 { font-size: 3rem; font-weight: 400; letter-spacing: 0.02em; }
.elegant .ornament { color: var(--elegant-accent-light); letter-spacing: 1em; margin: 2rem 0; }
.elegant section { background: var(--elegant-section-bg); padding: 3rem 2rem; margin: 3rem 0; border-top: 1px solid var(--elegant-border); border-bottom: 1px solid var(--elegant-border); }
.elegant .timeline { text-align: left; border-left: 1px solid var(--elegant-accent); margin-left: 1rem; padding-left: 2rem; }
.elegant .timeline .entry { position: relative; margin-bottom: 2rem; }
.elegant .timeline .entry::before { content: ""; position: absolute; left: -2.4rem; top: 0.4rem; width: 0.75rem; height: 0.75rem; border-radius: 50%; background: var(--elegant-accent); }
.elegant .timeline .when { color: var(--elegant-text-secondary); font-style: italic; }
.elegant .project-card { background: var(--elegant-card-bg) !important; padding: 2rem; margin: 1rem 0; text-align: left; }
.elegant h2 { font-family: Georgia, serif; font-weight: 400; font-style: italic; }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Elegant",
        description: "Refined serif typography with a career timeline",
        thumbnail: "/thumbnails/elegant.png",
        premium: true,
        variation: PaletteVariation::darken(10),
        tokens: TOKENS,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

fn timeline(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return String::new();
    }
    let entries = experiences
        .iter()
        .map(|e| {
            format!(
                "<div class=\"entry\"><p class=\"when\">{}</p><h3>{} <small>at {}</small></h3><p>{}</p></div>",
                escape(&e.period()),
                escape(&e.role),
                escape(&e.company),
                escape(&e.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<div class=\"timeline\">\n{}\n</div>", entries)
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;
    let ornament = "<div class=\"ornament\">&#10022; &#10022; &#10022;</div>";

    format!(
        r#"<div class="elegant">
<main class="frame">
{hero}
{ornament}
{experience}
{projects}
{education}
{skills}
{ornament}
{socials}
</main>
</div>"#,
        hero = components::hero(ctx, &p.content, "masthead"),
        ornament = ornament,
        experience = components::section(
            ctx,
            "experience",
            "experience",
            "Career",
            &timeline(&p.experiences),
        ),
        projects = components::section(
            ctx,
            "projects",
            "projects",
            "Selected Work",
            &components::project_cards(ctx, &p.projects),
        ),
        education = components::section(
            ctx,
            "education",
            "education",
            "Education",
            &components::education_list(ctx, &p.educations),
        ),
        skills = components::section(
            ctx,
            "skills",
            "skills",
            "Expertise",
            &components::skill_list(ctx, &p.skills),
        ),
        socials = components::social_links(ctx, &p.socials),
    )
}
