//! Text normalization, keyword matching and template rendering
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use regex::{Captures, Regex};
use std::sync::OnceLock;

static STRIP_PATTERN: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn strip_pattern() -> &'static Regex {
    STRIP_PATTERN.get_or_init(|| Regex::new(r"[^a-z0-9\s]+").expect("strip pattern compiles"))
}

fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER_PATTERN
        .get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern compiles"))
}

/// Lowercase `text` and drop everything except ASCII letters, digits and whitespace.
///
/// Whitespace runs are kept as-is.
pub fn normalize(text: &str) -> String {
    strip_pattern()
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// True if any keyword occurs as a substring of the normalized text
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let normalized = normalize(text);
    keywords.iter().any(|keyword| normalized.contains(keyword))
}

/// Substitute `{key}` placeholders from `values`.
///
/// Placeholders with no matching key are left in place.
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// True if `template` contains the `{key}` placeholder
pub fn has_placeholder(template: &str, key: &str) -> bool {
    template.contains(&format!("{{{key}}}"))
}
