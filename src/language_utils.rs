//! Language utilities for language tag handling
//!
//! Tags look like `en-US` or `pt_BR`: an ISO 639-1 or ISO 639-3 primary
//! subtag optionally followed by a region or other subtags.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Primary subtag of a tag (`en` for `en-US`)
pub fn primary_subtag(tag: &str) -> &str {
    tag.trim().split(['-', '_']).next().unwrap_or("")
}

/// Look up the language of a tag's primary subtag
pub fn language_for_tag(tag: &str) -> Option<Language> {
    let primary = primary_subtag(tag).to_lowercase();
    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// Validate that a tag's primary subtag is a known ISO 639 code
pub fn validate_language_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(anyhow!("Language tag is empty"));
    }
    language_for_tag(tag)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language tag: {}", tag))
}

/// Normalize a tag for comparison: trimmed, lowercase, `-` separated
pub fn normalize_language_tag(tag: &str) -> String {
    tag.trim().replace('_', "-").to_lowercase()
}

/// Check if two language tags denote the same language and region
pub fn language_tags_match(a: &str, b: &str) -> bool {
    normalize_language_tag(a) == normalize_language_tag(b)
}

/// Human readable description, e.g. `English (US)` for `en-US`
pub fn describe_language_tag(tag: &str) -> String {
    let Some(language) = language_for_tag(tag) else {
        return tag.trim().to_string();
    };

    let region = tag
        .trim()
        .split(['-', '_'])
        .nth(1)
        .filter(|r| !r.is_empty());

    match region {
        Some(region) => format!("{} ({})", language.to_name(), region.to_uppercase()),
        None => language.to_name().to_string(),
    }
}
