//! Font resource injection into a document head
//!
//! The page shell owns one [`DocumentHead`] per response. The engine keeps at
//! most one font link in it, tagged with [`FONT_LINK_MARKER`].

use std::collections::BTreeMap;

use tracing::debug;

use super::fonts;
use crate::html;

/// Attribute identifying the link this engine manages
pub const FONT_LINK_MARKER: &str = "data-folio-font";

/// A `<link>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkElement {
    pub rel: String,
    pub href: String,
    pub attributes: BTreeMap<String, String>,
}

impl LinkElement {
    /// A stylesheet link
    pub fn stylesheet(href: &str) -> Self {
        Self {
            rel: "stylesheet".to_string(),
            href: href.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn to_html(&self) -> String {
        let mut out = format!(
            r#"<link rel="{}" href="{}""#,
            html::escape(&self.rel),
            html::escape(&self.href)
        );
        for (name, value) in &self.attributes {
            out.push_str(&format!(r#" {}="{}""#, name, html::escape(value)));
        }
        out.push('>');
        out
    }
}

/// The mutable `<head>` of a page being composed
#[derive(Debug, Clone, Default)]
pub struct DocumentHead {
    title: String,
    meta: Vec<(String, String)>,
    links: Vec<LinkElement>,
    styles: Vec<String>,
}

impl DocumentHead {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn add_meta(&mut self, name: &str, content: &str) {
        self.meta.push((name.to_string(), content.to_string()));
    }

    pub fn add_link(&mut self, link: LinkElement) {
        self.links.push(link);
    }

    /// Remove every link matching `predicate`, returning how many were removed
    pub fn remove_links(&mut self, predicate: impl Fn(&LinkElement) -> bool) -> usize {
        let before = self.links.len();
        self.links.retain(|l| !predicate(l));
        before - self.links.len()
    }

    pub fn links(&self) -> &[LinkElement] {
        &self.links
    }

    pub fn add_style(&mut self, css: String) {
        self.styles.push(css);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from("<head>\n<meta charset=\"utf-8\">\n");
        out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
        out.push('\n');
        out.push_str(&format!("<title>{}</title>\n", html::escape(&self.title)));
        for (name, content) in &self.meta {
            out.push_str(&format!(
                "<meta name=\"{}\" content=\"{}\">\n",
                html::escape(name),
                html::escape(content)
            ));
        }
        for link in &self.links {
            out.push_str(&link.to_html());
            out.push('\n');
        }
        for css in &self.styles {
            // Style content is generated from templates, never user markup
            out.push_str("<style>\n");
            out.push_str(&css.replace("</style", "<\\/style"));
            out.push_str("\n</style>\n");
        }
        out.push_str("</head>");
        out
    }
}

/// Make `head` carry exactly the font link for `font_id`.
///
/// Any previously injected font link is removed first; the default font gets
/// no link. Calling this repeatedly with the same id leaves one link.
pub fn apply_font(head: &mut DocumentHead, font_id: &str) {
    let removed = head.remove_links(|l| l.has_attribute(FONT_LINK_MARKER));
    let font = fonts::resolve(font_id);
    if font.is_default() {
        debug!("Default font active, removed {} font link(s)", removed);
        return;
    }
    head.add_link(LinkElement::stylesheet(font.url).with_attribute(FONT_LINK_MARKER, font.id));
}

/// Number of engine-managed font links in `head`
pub fn font_link_count(head: &DocumentHead) -> usize {
    head.links()
        .iter()
        .filter(|l| l.has_attribute(FONT_LINK_MARKER))
        .count()
}
