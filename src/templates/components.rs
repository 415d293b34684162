//! Presentational pieces shared by templates
//!
//! Components take their colors and fonts from the [`StyleContext`] variables
//! so they match whichever palette the view resolved.

use crate::html::{escape, safe_url};
use crate::portfolio::{Content, Education, Experience, Project, Skill, Social};
use crate::theme::StyleContext;

/// A titled page section
pub fn section(ctx: &StyleContext, id: &str, class: &str, title: &str, inner: &str) -> String {
    if inner.trim().is_empty() {
        return String::new();
    }
    format!(
        r#"<section id="{id}" class="{class}">
<h2 class="section-title" style="color: {accent}; font-family: {heading};">{title}</h2>
{inner}
</section>"#,
        id = escape(id),
        class = escape(class),
        accent = ctx.var("accent"),
        heading = ctx.var("font-heading"),
        title = escape(title),
        inner = inner,
    )
}

/// Small pill label
pub fn tag(ctx: &StyleContext, text: &str) -> String {
    format!(
        r#"<span class="tag" style="background: rgba({rgb}, 0.12); color: {accent}; border-radius: 999px; padding: 0.15rem 0.6rem; font-size: 0.8rem;">{text}</span>"#,
        rgb = ctx.var("accent-rgb"),
        accent = ctx.var("accent"),
        text = escape(text),
    )
}

/// Primary call-to-action link
pub fn button(ctx: &StyleContext, label: &str, href: &str) -> String {
    format!(
        r#"<a class="button" href="{href}" style="background: {accent}; color: {on_accent}; padding: 0.6rem 1.2rem; border-radius: 0.5rem; text-decoration: none;">{label}</a>"#,
        href = safe_url(href),
        accent = ctx.var("accent"),
        on_accent = ctx.var("on-accent"),
        label = escape(label),
    )
}

/// Name, headline, bio and avatar
pub fn hero(ctx: &StyleContext, content: &Content, class: &str) -> String {
    let avatar = content
        .avatar_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img class="avatar" src="{}" alt="{}" style="border: 3px solid {};">"#,
                safe_url(url),
                escape(&content.name),
                ctx.var("accent")
            )
        })
        .unwrap_or_default();
    let location = content
        .location
        .as_deref()
        .map(|l| format!(r#"<p class="location" style="color: {};">{}</p>"#, ctx.var("muted"), escape(l)))
        .unwrap_or_default();
    let contact = content
        .email
        .as_deref()
        .map(|e| button(ctx, "Get in touch", &format!("mailto:{}", e)))
        .unwrap_or_default();

    format!(
        r#"<header class="{class}">
{avatar}
<h1 style="font-family: {heading};">{name}</h1>
<p class="headline" style="color: {muted};">{headline}</p>
{location}
<p class="bio">{bio}</p>
{contact}
</header>"#,
        class = escape(class),
        avatar = avatar,
        heading = ctx.var("font-heading"),
        name = escape(&content.name),
        muted = ctx.var("muted"),
        headline = escape(&content.headline),
        location = location,
        bio = escape(&content.bio),
        contact = contact,
    )
}

pub fn experience_list(ctx: &StyleContext, items: &[Experience]) -> String {
    items
        .iter()
        .map(|e| {
            format!(
                r#"<article class="experience" style="border-left: 3px solid {accent};">
<h3>{role}</h3>
<p class="meta" style="color: {muted};">{company} &middot; {period}</p>
<p>{description}</p>
</article>"#,
                accent = ctx.var("accent"),
                role = escape(&e.role),
                muted = ctx.var("muted"),
                company = escape(&e.company),
                period = escape(&e.period()),
                description = escape(&e.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn education_list(ctx: &StyleContext, items: &[Education]) -> String {
    items
        .iter()
        .map(|e| {
            let degree = match e.field.as_deref() {
                Some(field) if !field.is_empty() => format!("{}, {}", e.degree, field),
                _ => e.degree.clone(),
            };
            format!(
                r#"<article class="education">
<h3>{school}</h3>
<p class="meta" style="color: {muted};">{degree} &middot; {period}</p>
</article>"#,
                school = escape(&e.school),
                muted = ctx.var("muted"),
                degree = escape(&degree),
                period = escape(&e.period()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Skills as tags, with a level bar when a level is known
pub fn skill_list(ctx: &StyleContext, skills: &[Skill]) -> String {
    if skills.is_empty() {
        return String::new();
    }
    let items = skills
        .iter()
        .map(|s| match s.level {
            Some(level) => format!(
                r#"<li class="skill">{tag}<span class="skill-bar" style="background: {border};"><span style="width: {level}%; background: {accent};"></span></span></li>"#,
                tag = tag(ctx, &s.name),
                border = ctx.var("border"),
                level = level.min(100),
                accent = ctx.var("accent"),
            ),
            None => format!(r#"<li class="skill">{}</li>"#, tag(ctx, &s.name)),
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<ul class=\"skills\">\n{}\n</ul>", items)
}

pub fn project_cards(ctx: &StyleContext, projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| {
            let image = p
                .image_url
                .as_deref()
                .map(|url| format!(r#"<img src="{}" alt="{}">"#, safe_url(url), escape(&p.title)))
                .unwrap_or_default();
            let tags = p.tags.iter().map(|t| tag(ctx, t)).collect::<Vec<_>>().join(" ");
            let mut links = Vec::new();
            if let Some(url) = &p.url {
                links.push(format!(
                    r#"<a href="{}" style="color: {};">Live</a>"#,
                    safe_url(url),
                    ctx.var("accent")
                ));
            }
            if let Some(url) = &p.repo_url {
                links.push(format!(
                    r#"<a href="{}" style="color: {};">Source</a>"#,
                    safe_url(url),
                    ctx.var("accent")
                ));
            }
            format!(
                r#"<article class="project-card" style="background: {card}; border: 1px solid {border};">
{image}
<h3>{title}</h3>
<p>{description}</p>
<div class="tags">{tags}</div>
<div class="links">{links}</div>
</article>"#,
                card = ctx.var("card"),
                border = ctx.var("border"),
                image = image,
                title = escape(&p.title),
                description = escape(&p.description),
                tags = tags,
                links = links.join(" "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn social_links(ctx: &StyleContext, socials: &[Social]) -> String {
    if socials.is_empty() {
        return String::new();
    }
    let links = socials
        .iter()
        .map(|s| {
            format!(
                r#"<a class="social" href="{}" rel="me noopener" style="color: {};">{}</a>"#,
                safe_url(&s.url),
                ctx.var("text"),
                escape(&s.platform)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("<nav class=\"socials\">\n{}\n</nav>", links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{PaletteVariation, ThemeOptions};

    fn ctx() -> StyleContext {
        StyleContext::new(ThemeOptions::default(), PaletteVariation::default())
    }

    #[test]
    fn test_components_use_context_variables() {
        let ctx = ctx();
        let html = section(&ctx, "about", "about", "About", "<p>x</p>");
        assert!(html.contains("color: var(--folio-accent)"));
        assert!(!html.contains("#3b82f6"));

        let html = tag(&ctx, "Rust");
        assert!(html.contains("rgba(var(--folio-accent-rgb), 0.12)"));
    }

    #[test]
    fn test_empty_section_omitted() {
        assert_eq!(section(&ctx(), "x", "x", "X", "  "), "");
        assert_eq!(skill_list(&ctx(), &[]), "");
        assert_eq!(social_links(&ctx(), &[]), "");
    }

    #[test]
    fn test_user_content_escaped() {
        let project = Project {
            title: "<script>".into(),
            url: Some("javascript:alert(1)".into()),
            ..Default::default()
        };
        let html = project_cards(&ctx(), &[project]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_skill_level_clamped() {
        let skills = [Skill {
            name: "Rust".into(),
            level: Some(250),
            category: None,
        }];
        assert!(skill_list(&ctx(), &skills).contains("width: 100%"));
    }
}
