//! Stylesheet and accent color.

use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

const STYLESHEET: &str = include_str!("../../assets/style.css");

/// Accent color baked into the stylesheet.
pub const DEFAULT_ACCENT: &str = "#03c3f5";

const NAMED_COLORS: &[(&str, &str)] = &[
    ("blue", "#004bff"),
    ("cyan", DEFAULT_ACCENT),
    ("red", "#e50914"),
    ("green", "#00991e"),
    ("orange", "#ff5626"),
    ("purple", "#ad0fc9"),
];

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// Map a color name or `#RRGGBB` value to a hex color.
pub fn resolve_color(name: &str) -> Result<String> {
    if RE_HEX_COLOR.is_match(name) {
        return Ok(name.to_lowercase());
    }
    match NAMED_COLORS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
        Some((_, hex)) => Ok(hex.to_string()),
        None => bail!(
            "unknown color: {}. Use blue, cyan, red, green, orange, purple, or #RRGGBB",
            name
        ),
    }
}

/// The stylesheet with every occurrence of the accent replaced by `accent`.
pub fn stylesheet(accent: &str) -> String {
    STYLESHEET.replace(DEFAULT_ACCENT, accent)
}
