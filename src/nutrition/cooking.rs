//! Cooking method multipliers
//!
//! Maps a free-text cooking method to a calorie/fat scale factor. Exact
//! matches are tried first, then an ordered list of substring rules, then a
//! 1.0 default. Fat is scaled by this factor twice relative to the quantity
//! multiplier (frying adds oil, which is almost all fat); the calculator
//! applies that asymmetry.

/// Exact multipliers by normalized method name
const EXACT: &[(&str, f64)] = &[
    ("raw", 1.0),
    ("boiled", 1.0),
    ("steamed", 1.0),
    ("baked", 1.05),
    ("grilled", 1.1),
    ("roasted", 1.1),
    ("sauteed", 1.2),
    ("sautéed", 1.2),
    ("stir_fried", 1.25),
    ("stir-fried", 1.25),
    ("braised", 1.15),
    ("fried", 1.4),
    ("deep_fried", 1.8),
    ("deep-fried", 1.8),
];

/// Substring fallback rules, evaluated in order after the fry checks
const HEURISTICS: &[(&str, f64)] = &[
    ("grill", 1.1),
    // "bak" rather than "bake" so gerund forms ("baking") match like the
    // other rules do
    ("bak", 1.05),
    ("roast", 1.1),
    ("steam", 1.0),
    ("boil", 1.0),
    ("saut", 1.2),
];

/// Multiplier above which the validator warns about added-fat calories
pub const ADDED_FAT_WARNING_THRESHOLD: f64 = 1.3;

/// Look up the multiplier for a cooking method
///
/// Absent or empty method means uncooked-as-described and returns 1.0, as
/// does any method no rule recognizes.
pub fn cooking_multiplier(method: Option<&str>) -> f64 {
    let normalized = match method {
        Some(m) if !m.trim().is_empty() => normalize_method(m),
        _ => return 1.0,
    };

    if let Some((_, factor)) = EXACT.iter().find(|(key, _)| *key == normalized) {
        return *factor;
    }

    // Fry variants take priority over everything else
    if normalized.contains("fry") || normalized.contains("fried") {
        return if normalized.contains("deep") { 1.8 } else { 1.4 };
    }

    HEURISTICS
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// Lowercase and replace spaces with underscores
fn normalize_method(method: &str) -> String {
    method.trim().to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty() {
        assert_eq!(cooking_multiplier(None), 1.0);
        assert_eq!(cooking_multiplier(Some("")), 1.0);
        assert_eq!(cooking_multiplier(Some("   ")), 1.0);
    }

    #[test]
    fn test_exact_matches() {
        assert_eq!(cooking_multiplier(Some("raw")), 1.0);
        assert_eq!(cooking_multiplier(Some("Boiled")), 1.0);
        assert_eq!(cooking_multiplier(Some("baked")), 1.05);
        assert_eq!(cooking_multiplier(Some("grilled")), 1.1);
        assert_eq!(cooking_multiplier(Some("fried")), 1.4);
        assert_eq!(cooking_multiplier(Some("braised")), 1.15);
        assert_eq!(cooking_multiplier(Some("deep fried")), 1.8);
        assert_eq!(cooking_multiplier(Some("stir fried")), 1.25);
        assert_eq!(cooking_multiplier(Some("sautéed")), 1.2);
    }

    #[test]
    fn test_substring_fallbacks() {
        assert_eq!(cooking_multiplier(Some("pan frying")), 1.4);
        assert_eq!(cooking_multiplier(Some("deep frying in oil")), 1.8);
        assert_eq!(cooking_multiplier(Some("charcoal grilling")), 1.1);
        assert_eq!(cooking_multiplier(Some("oven baking")), 1.05);
        assert_eq!(cooking_multiplier(Some("slow roasting")), 1.1);
        assert_eq!(cooking_multiplier(Some("steaming")), 1.0);
        assert_eq!(cooking_multiplier(Some("sauteing")), 1.2);
    }

    #[test]
    fn test_gerund_forms_match_their_past_tense() {
        let pairs = [
            ("frying", "fried"),
            ("grilling", "grilled"),
            ("baking", "baked"),
            ("roasting", "roasted"),
            ("steaming", "steamed"),
            ("boiling", "boiled"),
            ("sauteing", "sauteed"),
        ];
        for (gerund, past) in pairs {
            assert_eq!(
                cooking_multiplier(Some(gerund)),
                cooking_multiplier(Some(past)),
                "{gerund} vs {past}"
            );
        }
    }

    #[test]
    fn test_unknown_method_defaults_to_one() {
        assert_eq!(cooking_multiplier(Some("sous vide")), 1.0);
        assert_eq!(cooking_multiplier(Some("microwaved")), 1.0);
    }
}
