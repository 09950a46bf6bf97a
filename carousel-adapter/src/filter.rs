//! Gallery category filtering and filename auto-categorization.
//!
//! Items carry a multi-value category attribute (space or comma
//! separated); a filter button either names one category or `"all"`.
//! Items without an explicit category get one derived from filename
//! tokens, so newly added images named with tags sort themselves.

use alloc::string::String;

/// Fallback category for items nothing else claims.
pub const DEFAULT_CATEGORY: &str = "posters";

// Filename tokens (including common misspellings seen in real asset names)
// mapping to a category. First match wins.
const CATEGORY_TOKENS: &[(&str, &[&str])] = &[
    ("boutique", &["botique", "boutique"]),
    ("bags", &["bag", "bags"]),
    ("cafe", &["cafe", "coffee"]),
    ("jewellery", &["jewellery", "jewelry", "jewel"]),
    ("restaurant", &["restuarant", "restaurant", "resto"]),
    ("vivaha", &["vivaha", "vivah", "wedding", "marriage"]),
    ("lifestyle", &["lifestyle", "fashion"]),
];

/// Splits a multi-value category attribute into its non-empty entries.
pub fn split_categories(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|s| !s.is_empty())
}

/// Whether an item with `raw` categories passes `filter`.
///
/// `"all"` passes everything; otherwise the comparison is
/// case-insensitive against each entry.
pub fn matches_filter(filter: &str, raw: &str) -> bool {
    if filter.eq_ignore_ascii_case("all") {
        return true;
    }
    split_categories(raw).any(|c| c.eq_ignore_ascii_case(filter))
}

/// Derives a category from an image source path by filename tokens.
pub fn auto_category(src: &str) -> Option<&'static str> {
    let filename = src.rsplit('/').next().unwrap_or(src);
    let normalized: String = filename
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    CATEGORY_TOKENS
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|t| normalized.contains(t)))
        .map(|(category, _)| *category)
}

/// Resolves an item's effective category the way the gallery assigns them.
///
/// An explicit category other than the generic fallback wins; otherwise
/// the filename tokens decide; otherwise the existing value, or the
/// fallback when there is none.
pub fn resolve_category(existing: Option<&str>, src: &str) -> String {
    let current = existing.unwrap_or("").trim();
    if !current.is_empty() && !current.eq_ignore_ascii_case(DEFAULT_CATEGORY) {
        return current.to_ascii_lowercase();
    }
    if let Some(category) = auto_category(src) {
        return String::from(category);
    }
    if current.is_empty() {
        String::from(DEFAULT_CATEGORY)
    } else {
        current.to_ascii_lowercase()
    }
}
