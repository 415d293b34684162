//! Color math over hex strings
//!
//! Palettes are carried as CSS color strings, so every helper here takes and
//! returns `#rrggbb` text. Short `#rgb` input is accepted and expanded.

/// Alpha suffix appended to a 6-digit hex color for ~60% opacity (0x99 = 153).
pub const MUTED_ALPHA_SUFFIX: &str = "99";

/// Parse `#rrggbb` or `#rgb` into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let s = hex.trim().strip_prefix('#')?;
    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match s.len() {
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Format RGB channels as lowercase `#rrggbb`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Returns true if `s` is a `#rgb` or `#rrggbb` color.
pub fn is_hex(s: &str) -> bool {
    hex_to_rgb(s).is_some()
}

/// Shift every channel by `percent` of the full range.
///
/// Positive values lighten, negative values darken. Each channel moves by
/// `round(2.55 * percent)` and is clamped to `[0, 255]`.
pub fn shift(hex: &str, percent: i32) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let amount = (2.55 * percent as f64).round() as i32;
    let apply = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
    Some(rgb_to_hex(apply(r), apply(g), apply(b)))
}

/// Lighten by a percentage (see [`shift`]).
pub fn lighten(hex: &str, percent: u8) -> Option<String> {
    shift(hex, percent as i32)
}

/// Darken by a percentage (see [`shift`]).
pub fn darken(hex: &str, percent: u8) -> Option<String> {
    shift(hex, -(percent as i32))
}

/// Channel-wise complement (`255 - v`).
pub fn complementary(hex: &str) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(rgb_to_hex(255 - r, 255 - g, 255 - b))
}

/// Perceived brightness in `[0, 1]` using `0.299r + 0.587g + 0.114b`.
pub fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.0
}

/// Pick black or white text for legibility on `background`.
///
/// Unparsable input is treated as a light background.
pub fn contrast_text(background: &str) -> &'static str {
    match hex_to_rgb(background) {
        Some((r, g, b)) if brightness(r, g, b) <= 0.5 => "#ffffff",
        _ => "#000000",
    }
}

/// Append an 8-digit alpha suffix to a hex color, expanding `#rgb` first.
pub fn with_alpha(hex: &str, alpha_suffix: &str) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(format!("{}{}", rgb_to_hex(r, g, b), alpha_suffix))
}

/// `r, g, b` triplet for use inside `rgba(var(--x-rgb), a)` declarations.
pub fn rgb_triplet(hex: &str) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(format!("{}, {}, {}", r, g, b))
}

/// Convert to an `rgba(...)` string with the given opacity.
pub fn rgba(hex: &str, alpha: f32) -> Option<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
}
