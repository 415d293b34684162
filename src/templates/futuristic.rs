//! Futuristic: dark terminal aesthetic with glowing accents

use super::components;
use crate::html::escape;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "futuristic";
const PREFIX: &str = "future";

const STYLE: &str = r#"
.future {
  --future-bg: #05070f;
  --future-text-primary: #e2e8f0;
  --future-text-secondary: #7dd3fc;
  --future-accent: #22d3ee;
  --future-accent-light: #67e8f9;
  --future-border: #164e63;
  --future-card-bg: #0b1220;
  --future-section-bg: rgba(34, 211, 238, 0.05);
  --future-gradient: linear-gradient(135deg, #22d3ee 0%, #a855f7 100%);
  font-family: 'Courier New', monospace;
  background: var(--future-bg);
  color: var(--future-text-primary);
  min-height: 100vh;
  background-image: linear-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px);
  background-size: 100% 2rem;
}
.future .console { max-width: 60rem; margin: 0 auto; padding: 4rem 1.5rem; }
.future .prompt { color: var(--future-accent); }
.future .prompt::before { content: "> "; }
.future h1 {
  background: var(--future-gradient);
  -webkit-background-clip: text;
  color: transparent;
  font-size: 3rem;
}
.future section { background: var(--future-section-bg); border: 1px solid var(--future-border); padding: 2rem; margin: 2rem 0; }
.future .project-card { background: var(--future-card-bg) !important; border: 1px solid var(--future-border) !important; padding: 1.5rem; margin-bottom: 1rem; box-shadow: 0 0 12px var(--future-accent-light); }
.future .meta, .future .headline { color: var(--future-text-secondary) !important; }
.future .status { display: flex; gap: 2rem; border-bottom: 1px dashed var(--future-border); padding-bottom: 1rem; }
.future h2 { font-family: 'Courier New', monospace; text-transform: uppercase; letter-spacing: 0.15em; }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Futuristic",
        description: "Dark console styling with neon gradients",
        thumbnail: "/thumbnails/futuristic.png",
        premium: true,
        variation: PaletteVariation::lighten(20),
        tokens: &StyleToken::ALL,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;
    let handle = p
        .content
        .name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let status = format!(
        "<div class=\"status\"><span class=\"prompt\">whoami: {}</span><span>projects: {}</span><span>skills: {}</span></div>",
        escape(&handle),
        p.projects.len(),
        p.skills.len()
    );

    format!(
        r#"<div class="future">
<main class="console">
{status}
{hero}
{skills}
{projects}
{experience}
{education}
{socials}
</main>
</div>"#,
        status = status,
        hero = components::hero(ctx, &p.content, "identity"),
        skills = components::section(
            ctx,
            "skills",
            "skills",
            "Stack",
            &components::skill_list(ctx, &p.skills),
        ),
        projects = components::section(
            ctx,
            "projects",
            "projects",
            "Deployments",
            &components::project_cards(ctx, &p.projects),
        ),
        experience = components::section(
            ctx,
            "experience",
            "experience",
            "Log",
            &components::experience_list(ctx, &p.experiences),
        ),
        education = components::section(
            ctx,
            "education",
            "education",
            "Training",
            &components::education_list(ctx, &p.educations),
        ),
        socials = components::social_links(ctx, &p.socials),
    )
}
