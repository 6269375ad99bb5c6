//! Static lookup tables and conversion constants
//!
//! Ordered `(substring-key, value)` tables mapping normalized food keys to
//! gram weights. Lookups scan in declaration order and take the first entry
//! whose key occurs in the food key; more specific keys are listed before
//! shorter ones. Tables carry Arabic aliases alongside English names since
//! the app accepts spoken input in either language.

/// Grams per ounce
pub const G_PER_OZ: f64 = 28.35;
/// Grams per pound
pub const G_PER_LB: f64 = 453.6;
/// Tablespoons per US cup
pub const TBSP_PER_CUP: f64 = 16.0;
/// Teaspoons per US cup
pub const TSP_PER_CUP: f64 = 48.0;

/// Fallback gram weight for one cup of an unknown food
pub const DEFAULT_CUP_GRAMS: f64 = 100.0;
/// Fallback gram weight for one piece of an unknown food
pub const DEFAULT_PIECE_GRAMS: f64 = 100.0;
/// Fallback density for liquids not in the density table (water-like)
pub const DEFAULT_G_PER_ML: f64 = 1.0;

/// Grams per US cup by food key substring
const GRAMS_PER_CUP: &[(&str, f64)] = &[
    ("rice", 185.0),
    ("أرز", 185.0),
    ("رز", 185.0),
    ("flour", 120.0),
    ("طحين", 120.0),
    ("sugar", 200.0),
    ("سكر", 200.0),
    ("oat", 90.0),
    ("شوفان", 90.0),
    ("quinoa", 185.0),
    ("lentil", 200.0),
    ("عدس", 200.0),
    ("bean", 180.0),
    ("chickpea", 164.0),
    ("حمص", 164.0),
    ("bulgur", 140.0),
    ("برغل", 140.0),
    ("couscous", 175.0),
    ("yogurt", 245.0),
    ("لبن", 245.0),
    ("milk", 244.0),
    ("حليب", 244.0),
    ("honey", 340.0),
    ("عسل", 340.0),
    ("oil", 218.0),
    ("زيت", 218.0),
    ("water", 237.0),
    ("ماء", 237.0),
];

/// Grams per piece by food key substring (standard serving weights)
const GRAMS_PER_PIECE: &[(&str, f64)] = &[
    ("egg", 50.0),
    ("بيض", 50.0),
    ("apple", 182.0),
    ("تفاح", 182.0),
    ("banana", 118.0),
    ("موز", 118.0),
    ("orange", 131.0),
    ("برتقال", 131.0),
    ("date", 7.0),
    ("تمر", 7.0),
    ("falafel", 17.0),
    ("فلافل", 17.0),
    ("pita", 60.0),
    ("خبز", 60.0),
    ("bread", 30.0),
    ("tortilla", 45.0),
    ("potato", 173.0),
    ("بطاط", 173.0),
    ("tomato", 123.0),
    ("طماطم", 123.0),
];

/// Liquid densities in g/ml by food key substring
const G_PER_ML: &[(&str, f64)] = &[
    ("oil", 0.92),
    ("زيت", 0.92),
    ("honey", 1.4),
    ("عسل", 1.4),
    ("syrup", 1.4),
    ("دبس", 1.4),
    ("milk", 1.03),
    ("حليب", 1.03),
];

/// Foods that should not be measured in cups (solid/whole items)
const VOLUME_INCOMPATIBLE: &[&str] = &[
    "chicken", "beef", "fish", "meat", "egg", "apple", "banana", "orange",
];

fn scan(table: &[(&str, f64)], food_key: &str) -> Option<f64> {
    if food_key.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|(key, _)| food_key.contains(key))
        .map(|(_, grams)| *grams)
}

/// Gram weight of one cup of this food, if known
pub fn cup_grams(food_key: &str) -> Option<f64> {
    scan(GRAMS_PER_CUP, food_key)
}

/// Gram weight of one piece of this food, if known
pub fn piece_grams(food_key: &str) -> Option<f64> {
    scan(GRAMS_PER_PIECE, food_key)
}

/// Density of this food in g/ml, if it matches a known liquid
pub fn liquid_density(food_key: &str) -> Option<f64> {
    scan(G_PER_ML, food_key)
}

/// True when measuring this food in cups is implausible
pub fn is_volume_incompatible(food_key: &str) -> bool {
    VOLUME_INCOMPATIBLE.iter().any(|key| food_key.contains(key))
}
