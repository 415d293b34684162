//! Modern: sidebar profile with a card grid

use super::components;
use crate::html::escape;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "modern";
const PREFIX: &str = "modern";

const STYLE: &str = r#"
.modern {
  --modern-bg: #f8fafc;
  --modern-text-primary: #0f172a;
  --modern-text-secondary: #64748b;
  --modern-accent: #6366f1;
  --modern-accent-light: #818cf8;
  --modern-border: #e2e8f0;
  --modern-card-bg: #ffffff;
  --modern-section-bg: #f1f5f9;
  --modern-gradient: linear-gradient(135deg, #6366f1 0%, #818cf8 100%);
  font-family: system-ui, sans-serif;
  background: var(--modern-bg);
  color: var(--modern-text-primary);
  display: grid;
  grid-template-columns: 20rem 1fr;
  min-height: 100vh;
}
.modern aside {
  background: var(--modern-gradient);
  color: #ffffff;
  padding: 3rem 2rem;
  position: sticky;
  top: 0;
  height: 100vh;
}
.modern aside .headline, .modern aside .location { color: rgba(255, 255, 255, 0.85) !important; }
.modern .content { padding: 3rem; }
.modern section { background: var(--modern-section-bg); border-radius: 1rem; padding: 2rem; margin-bottom: 2rem; }
.modern .projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.modern .project-card { background: var(--modern-card-bg); border: 1px solid var(--modern-border); border-radius: 0.75rem; padding: 1.5rem; }
.modern .project-card:hover { border-color: var(--modern-accent-light); }
.modern .meta { color: var(--modern-text-secondary); }
.modern .stats { display: flex; gap: 1rem; margin-top: 2rem; }
.modern .stat strong { display: block; font-size: 1.5rem; }
.modern h2 { font-family: system-ui, sans-serif; color: var(--modern-accent); }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Modern",
        description: "Sidebar profile with a responsive project grid",
        thumbnail: "/thumbnails/modern.png",
        premium: false,
        variation: PaletteVariation::lighten(15),
        tokens: &StyleToken::ALL,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

fn stat(label: &str, count: usize) -> String {
    format!(
        "<div class=\"stat\"><strong>{}</strong>{}</div>",
        count,
        escape(label)
    )
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;
    let stats = [
        stat("Projects", p.projects.len()),
        stat("Roles", p.experiences.len()),
        stat("Skills", p.skills.len()),
    ]
    .join("");

    let projects = if p.projects.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"projects-grid\">\n{}\n</div>",
            components::project_cards(ctx, &p.projects)
        )
    };

    format!(
        r#"<div class="modern">
<aside>
{hero}
<div class="stats">{stats}</div>
{socials}
</aside>
<main class="content">
{projects}
{experience}
{skills}
{education}
</main>
</div>"#,
        hero = components::hero(ctx, &p.content, "profile"),
        stats = stats,
        socials = components::social_links(ctx, &p.socials),
        projects = components::section(ctx, "projects", "projects", "Featured Work", &projects),
        experience = components::section(
            ctx,
            "experience",
            "experience",
            "Experience",
            &components::experience_list(ctx, &p.experiences),
        ),
        skills = components::section(
            ctx,
            "skills",
            "skills",
            "Skills",
            &components::skill_list(ctx, &p.skills),
        ),
        education = components::section(
            ctx,
            "education",
            "education",
            "Education",
            &components::education_list(ctx, &p.educations),
        ),
    )
}
