//! Quantity/unit conversion
//!
//! Computes the dimensionless multiplier that converts nutrition expressed
//! per 100 reference units into nutrition for the requested quantity+unit.

use tracing::warn;

use super::tables::{
    cup_grams, liquid_density, piece_grams, DEFAULT_CUP_GRAMS, DEFAULT_G_PER_ML,
    DEFAULT_PIECE_GRAMS, G_PER_LB, G_PER_OZ, TBSP_PER_CUP, TSP_PER_CUP,
};

/// Outcome of a quantity/unit conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityConversion {
    /// Scale factor relative to the 100 g (or 100-unit) baseline
    pub multiplier: f64,
    /// False when the unit string was not recognized and the 1:1 fallback applied
    pub unit_recognized: bool,
}

impl QuantityConversion {
    fn recognized(multiplier: f64) -> Self {
        Self {
            multiplier,
            unit_recognized: true,
        }
    }
}

/// Compute the nutrition multiplier for `quantity` of `unit` of the food
///
/// `food_key` must already be normalized (see [`super::food_key`]); it drives
/// the per-cup and per-piece gram lookups, falling back to 100 g when the
/// food is unknown. Unit matching is case-insensitive.
///
/// An unrecognized unit falls back to `multiplier = quantity`, treating the
/// unit as a 1:1 serving match. That is imprecise but deliberate legacy
/// behavior; callers see it as `unit_recognized = false` and a logged warning.
pub fn quantity_multiplier(food_key: &str, quantity: f64, unit: &str) -> QuantityConversion {
    let lower = unit.to_lowercase();

    let grams = match lower.trim() {
        "g" | "gram" | "grams" => quantity,
        "piece" | "pieces" | "item" | "items" => {
            quantity * piece_grams(food_key).unwrap_or(DEFAULT_PIECE_GRAMS)
        }
        "cup" | "cups" => quantity * cup_grams(food_key).unwrap_or(DEFAULT_CUP_GRAMS),
        "tbsp" | "tablespoon" | "tablespoons" => {
            quantity * cup_grams(food_key).unwrap_or(DEFAULT_CUP_GRAMS) / TBSP_PER_CUP
        }
        "tsp" | "teaspoon" | "teaspoons" => {
            quantity * cup_grams(food_key).unwrap_or(DEFAULT_CUP_GRAMS) / TSP_PER_CUP
        }
        "oz" | "ounce" | "ounces" => quantity * G_PER_OZ,
        "lb" | "lbs" | "pound" | "pounds" => quantity * G_PER_LB,
        "ml" | "milliliter" | "milliliters" => {
            quantity * liquid_density(food_key).unwrap_or(DEFAULT_G_PER_ML)
        }
        other => {
            warn!(
                "Unrecognized unit '{}' for '{}'. Treating {} as a 1:1 serving match.",
                other, food_key, quantity
            );
            return QuantityConversion {
                multiplier: quantity,
                unit_recognized: false,
            };
        }
    };

    QuantityConversion::recognized(grams / 100.0)
}
