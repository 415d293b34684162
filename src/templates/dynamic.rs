//! Dynamic: full-bleed sections, skills grouped by category

use indexmap::IndexMap;

use super::components;
use crate::html::escape;
use crate::portfolio::Skill;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "dynamic";
const PREFIX: &str = "dynamic";

const STYLE: &str = r#"
.dynamic {
  --dynamic-bg: #ffffff;
  --dynamic-text-primary: #18181b;
  --dynamic-text-secondary: #71717a;
  --dynamic-accent: #8b5cf6;
  --dynamic-accent-light: #a78bfa;
  --dynamic-border: #e4e4e7;
  --dynamic-card-bg: #fafafa;
  --dynamic-section-bg: #f5f3ff;
  --dynamic-gradient: linear-gradient(135deg, #8b5cf6 0%, #ec4899 100%);
  font-family: 'Helvetica Neue', Arial, sans-serif;
  background: var(--dynamic-bg);
  color: var(--dynamic-text-primary);
  scroll-behavior: smooth;
}
.dynamic .topbar { position: sticky; top: 0; display: flex; gap: 1.5rem; justify-content: center; padding: 1rem; background: var(--dynamic-bg); border-bottom: 1px solid var(--dynamic-border); z-index: 10; }
.dynamic .topbar a { color: var(--dynamic-text-secondary); text-decoration: none; }
.dynamic .topbar a:hover { color: var(--dynamic-accent); }
.dynamic .cover { background: var(--dynamic-gradient); color: #ffffff; min-height: 70vh; display: flex; flex-direction: column; justify-content: center; align-items: center; }
.dynamic .cover .headline, .dynamic .cover .location { color: rgba(255, 255, 255, 0.85) !important; }
.dynamic section { padding: 5rem max(1.5rem, calc((100% - 64rem) / 2)); }
.dynamic section:nth-of-type(even) { background: var(--dynamic-section-bg); }
.dynamic .project-card { background: var(--dynamic-card-bg) !important; border-radius: 1rem; padding: 1.5rem; margin-bottom: 1.5rem; transition: transform 0.2s; }
.dynamic .project-card:hover { transform: translateY(-4px); box-shadow: 0 10px 30px -10px var(--dynamic-accent-light); }
.dynamic .skill-group h3 { color: var(--dynamic-accent); }
.dynamic .meta { color: var(--dynamic-text-secondary); }
.dynamic h2 { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 2.5rem; }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Dynamic",
        description: "Full-bleed sections with sticky navigation",
        thumbnail: "/thumbnails/dynamic.png",
        premium: true,
        variation: PaletteVariation::lighten(15),
        tokens: &StyleToken::ALL,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

/// Skills grouped by category, uncategorised last
fn skill_groups(ctx: &StyleContext, skills: &[Skill]) -> String {
    let mut groups: IndexMap<&str, Vec<Skill>> = IndexMap::new();
    for skill in skills {
        let category = skill.category.as_deref().filter(|c| !c.is_empty()).unwrap_or("Other");
        groups.entry(category).or_default().push(skill.clone());
    }
    if let Some(other) = groups.shift_remove("Other") {
        groups.insert("Other", other);
    }

    groups
        .iter()
        .map(|(category, skills)| {
            format!(
                "<div class=\"skill-group\"><h3>{}</h3>\n{}\n</div>",
                escape(category),
                components::skill_list(ctx, skills)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;

    let mut nav = Vec::new();
    if !p.projects.is_empty() {
        nav.push(("projects", "Work"));
    }
    if !p.experiences.is_empty() {
        nav.push(("experience", "Experience"));
    }
    if !p.skills.is_empty() {
        nav.push(("skills", "Skills"));
    }
    if !p.educations.is_empty() {
        nav.push(("education", "Education"));
    }
    let nav = nav
        .iter()
        .map(|(anchor, label)| format!("<a href=\"#{}\">{}</a>", anchor, label))
        .collect::<Vec<_>>()
        .join("");

    format!(
        r#"<div class="dynamic">
<nav class="topbar">{nav}</nav>
{cover}
{projects}
{experience}
{skills}
{education}
<footer>{socials}</footer>
</div>"#,
        nav = nav,
        cover = components::hero(ctx, &p.content, "cover"),
        projects = components::section(
            ctx,
            "projects",
            "projects",
            "Work",
            &components::project_cards(ctx, &p.projects),
        ),
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
            &skill_groups(ctx, &p.skills),
        ),
        education = components::section(
            ctx,
            "education",
            "education",
            "Education",
            &components::education_list(ctx, &p.educations),
        ),
        socials = components::social_links(ctx, &p.socials),
    )
}
