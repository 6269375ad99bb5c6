//! Serving normalization
//!
//! Converts a user-confirmed total ("330 kcal for 200 g of chicken") into
//! the canonical storage form the food log keeps: a per-100g baseline for
//! weight-based entries, a per-piece baseline for everything else, plus a
//! quantity multiplier. The reverse direction reconstructs the user-facing
//! amount and unit for display and editing.

use tracing::warn;

use crate::models::{NutritionInfo, StoredFoodItem};

/// Convert a committed food entry into its canonical stored form
///
/// `total` is the nutrition for `quantity` of `unit` as confirmed by the
/// user. The stored baseline keeps full precision so that
/// `baseline * quantity_multiplier` reproduces `total` exactly; rounding
/// happens only at display time.
pub fn to_stored_form(total: &NutritionInfo, quantity: f64, unit: &str) -> StoredFoodItem {
    let quantity = if quantity.is_finite() && quantity > 0.0 {
        quantity
    } else {
        warn!("Non-positive quantity {} at store time, storing as 1", quantity);
        1.0
    };

    let lower = unit.to_lowercase();
    let unit_trimmed = lower.trim();

    if matches!(unit_trimmed, "g" | "gram" | "grams") {
        StoredFoodItem {
            nutrition: total.scale(100.0 / quantity),
            serving_size: 100.0,
            serving_size_unit: "g".to_string(),
            quantity_multiplier: quantity / 100.0,
        }
    } else {
        // Piece-like unit: baseline is one piece so quantity edits rescale
        // correctly for any new amount
        StoredFoodItem {
            nutrition: total.scale(1.0 / quantity),
            serving_size: 1.0,
            serving_size_unit: unit_trimmed.to_string(),
            quantity_multiplier: quantity,
        }
    }
}

/// Reconstruct the user-facing amount and unit of a stored entry
pub fn display_quantity(item: &StoredFoodItem) -> (f64, String) {
    if item.serving_size_unit == "g" {
        return (item.quantity_multiplier * 100.0, "g".to_string());
    }

    let amount = item.quantity_multiplier;
    let unit = if (amount - 1.0).abs() < f64::EPSILON {
        singularize(&item.serving_size_unit)
    } else {
        item.serving_size_unit.clone()
    };
    (amount, unit)
}

/// Drop a plural "s" from common unit names when the amount is exactly one
fn singularize(unit: &str) -> String {
    if unit.len() > 1 && unit.ends_with('s') && !unit.ends_with("ss") {
        unit[..unit.len() - 1].to_string()
    } else {
        unit.to_string()
    }
}
