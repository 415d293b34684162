//! Portfolio record
//!
//! The content a user maintains. The theme engine reads it and passes the
//! content collections through to the chosen template unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored portfolio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub socials: Vec<Social>,
    /// Theme option entries, oldest first; each is a JSON string or object
    #[serde(default)]
    pub options: Vec<Value>,
}

impl Portfolio {
    /// The options entry in effect (the most recent one)
    pub fn current_options(&self) -> Option<&Value> {
        self.options.last()
    }

    /// Title for the rendered page
    pub fn display_title(&self) -> String {
        match (self.content.name.trim(), self.content.headline.trim()) {
            ("", _) => "Portfolio".to_string(),
            (name, "") => name.to_string(),
            (name, headline) => format!("{} - {}", name, headline),
        }
    }
}

/// Bio and contact details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub bio: String,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    /// `None` for a current position
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Experience {
    pub fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    #[serde(default)]
    pub degree: String,
    pub field: Option<String>,
    #[serde(default)]
    pub start_date: String,
    pub end_date: Option<String>,
}

impl Education {
    pub fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency 0-100
    pub level: Option<u8>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: Option<String>,
    pub repo_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Social {
    pub platform: String,
    pub url: String,
}

fn period(start: &str, end: Option<&str>) -> String {
    match (start.trim(), end.map(str::trim)) {
        ("", None) => String::new(),
        ("", Some(end)) => end.to_string(),
        (start, None) => format!("{} - Present", start),
        (start, Some(end)) => format!("{} - {}", start, end),
    }
}
