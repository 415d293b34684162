//! Creative: bold hero, offset project tiles, playful accents

use super::components;
use crate::html::escape;
use crate::render::TemplateProps;
use crate::theme::{
    PaletteVariation, StyleContext, StyleSheet, StyleSheetError, StyleToken, TemplateDefinition,
};

pub const ID: &str = "creative";
const PREFIX: &str = "creative";

const STYLE: &str = r#"
.creative {
  --creative-bg: #fffbf5;
  --creative-text-primary: #1c1917;
  --creative-text-secondary: #78716c;
  --creative-accent: #f43f5e;
  --creative-accent-light: #fb7185;
  --creative-border: #fecdd3;
  --creative-card-bg: #ffffff;
  --creative-section-bg: #fff1f2;
  --creative-gradient: linear-gradient(135deg, #f43f5e 0%, #fb7185 100%);
  font-family: 'Trebuchet MS', sans-serif;
  background: var(--creative-bg);
  color: var(--creative-text-primary);
  overflow-x: hidden;
}
.creative .splash {
  background: var(--creative-gradient);
  color: #ffffff;
  padding: 6rem 2rem 8rem;
  clip-path: polygon(0 0, 100% 0, 100% 85%, 0 100%);
  text-align: center;
}
.creative .splash h1 { font-size: 4rem; letter-spacing: -0.04em; margin: 0; }
.creative .splash .headline, .creative .splash .location { color: rgba(255, 255, 255, 0.9) !important; }
.creative .body { max-width: 64rem; margin: -4rem auto 0; padding: 0 1.5rem 4rem; }
.creative section { background: var(--creative-section-bg); border-radius: 2rem; padding: 2.5rem; margin: 2rem 0; }
.creative .tiles { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2rem; }
.creative .tiles .project-card { background: var(--creative-card-bg); border: 2px solid var(--creative-border); border-radius: 1.5rem; padding: 1.5rem; transform: rotate(-1deg); }
.creative .tiles .project-card:nth-child(even) { transform: rotate(1deg) translateY(1.5rem); }
.creative .tiles .project-card:hover { border-color: var(--creative-accent-light); }
.creative .meta { color: var(--creative-text-secondary); }
.creative .marquee { color: var(--creative-accent); font-weight: 700; text-transform: uppercase; letter-spacing: 0.2em; text-align: center; }
.creative h2 { font-family: 'Trebuchet MS', sans-serif; }
"#;

pub fn definition() -> Result<TemplateDefinition, StyleSheetError> {
    Ok(TemplateDefinition {
        id: ID,
        name: "Creative",
        description: "Bold gradient splash with tilted project tiles",
        thumbnail: "/thumbnails/creative.png",
        premium: false,
        variation: PaletteVariation::darken(15),
        tokens: &StyleToken::ALL,
        style: StyleSheet::new(PREFIX, STYLE)?,
        render,
    })
}

fn render(props: &TemplateProps, ctx: &StyleContext) -> String {
    let p = &props.portfolio;

    let marquee = p
        .skills
        .iter()
        .map(|s| escape(&s.name).into_owned())
        .collect::<Vec<_>>()
        .join(" &#9733; ");
    let marquee = if marquee.is_empty() {
        String::new()
    } else {
        format!("<p class=\"marquee\">{}</p>", marquee)
    };

    let tiles = if p.projects.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"tiles\">\n{}\n</div>",
            components::project_cards(ctx, &p.projects)
        )
    };

    format!(
        r#"<div class="creative">
{splash}
<main class="body">
{marquee}
{projects}
{experience}
{education}
{socials}
</main>
</div>"#,
        splash = components::hero(ctx, &p.content, "splash"),
        marquee = marquee,
        projects = components::section(ctx, "projects", "projects", "Things I've made", &tiles),
        experience = components::section(
            ctx,
            "experience",
            "experience",
            "Where I've been",
            &components::experience_list(ctx, &p.experiences),
        ),
        education = components::section(
            ctx,
            "education",
            "education",
            "Learning",
            &components::education_list(ctx, &p.educations),
        ),
        socials = components::social_links(ctx, &p.socials),
    )
}
