use once_cell::sync::Lazy;
use regex::Regex;

// Runs after lowercasing, so only the lowercase ASCII range is kept.
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9_\s-]").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Derive a URL-safe identifier from free text: lowercase, trim, drop
/// anything that is not a word character, whitespace, or hyphen, then
/// collapse separator runs into single hyphens. Idempotent, and every
/// non-empty result passes [`validate_slug`].
pub fn generate_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = DISALLOWED.replace_all(lowered.trim(), "");
    let hyphenated = SEPARATORS.replace_all(&cleaned, "-");
    hyphenated.trim_matches('-').to_string()
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
