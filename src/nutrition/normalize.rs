//! Food name normalization
//!
//! Turns free-text food names into the lookup keys used by the static
//! tables: lowercased, whitespace runs collapsed to underscores, everything
//! that is neither alphanumeric nor an underscore stripped. Arabic letters
//! are alphanumeric and pass through unchanged.

/// Normalize a food name into a table lookup key
///
/// Empty or all-punctuation input yields an empty key, which misses every
/// table and falls through to the documented defaults.
pub fn food_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
