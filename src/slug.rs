//! Portfolio slugs
//!
//! A slug is the human-readable key in a portfolio's public URL
//! (`/portfolios/ada-lovelace`). Stored slugs are lowercase words joined by
//! single hyphens, between `MIN_SLUG_LEN` and `MAX_SLUG_LEN` bytes long.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const MIN_SLUG_LEN: usize = 3;
pub const MAX_SLUG_LEN: usize = 64;

/// Why a requested slug was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug is {0} characters; portfolio URLs need 3 to 64")]
    Length(usize),

    #[error("slug may only use a-z, 0-9 and inner hyphens")]
    InvalidCharacters,

    #[error("slug words must be separated by a single hyphen")]
    DoubleHyphen,
}

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-+[a-z0-9]+)*$").unwrap());

/// Check a requested slug, returning the form it is stored under
pub fn validate_slug(slug: &str) -> Result<String, SlugError> {
    let slug = slug.trim().to_lowercase();

    if !(MIN_SLUG_LEN..=MAX_SLUG_LEN).contains(&slug.len()) {
        return Err(SlugError::Length(slug.len()));
    }
    if !SLUG_REGEX.is_match(&slug) {
        return Err(SlugError::InvalidCharacters);
    }
    if slug.contains("--") {
        return Err(SlugError::DoubleHyphen);
    }

    Ok(slug)
}

/// Derive a slug candidate from a display name ("Ada Lovelace" -> "ada-lovelace")
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    slug.chars().take(MAX_SLUG_LEN).collect::<String>().trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert_eq!(validate_slug("ada").unwrap(), "ada");
        assert_eq!(validate_slug("ada-lovelace").unwrap(), "ada-lovelace");
        assert_eq!(validate_slug("Ada-Lovelace").unwrap(), "ada-lovelace");
        assert_eq!(validate_slug(&"a".repeat(64)).unwrap(), "a".repeat(64));
    }

    #[test]
    fn test_invalid_slugs() {
        assert_eq!(validate_slug("ab"), Err(SlugError::Length(2)));
        assert_eq!(validate_slug(&"a".repeat(65)), Err(SlugError::Length(65)));
        assert_eq!(validate_slug("-ada"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("ada-"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("ada lovelace"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("ada_lovelace"), Err(SlugError::InvalidCharacters));
        assert_eq!(validate_slug("ada--lovelace"), Err(SlugError::DoubleHyphen));
        assert!(SlugError::Length(2).to_string().contains("3 to 64"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ada Lovelace"), "ada-lovelace");
        assert_eq!(slugify("  Grace  M. Hopper! "), "grace-m-hopper");
        assert_eq!(slugify("***"), "");
        assert!(validate_slug(&slugify("Jean-Luc Picard")).is_ok());
    }
}
