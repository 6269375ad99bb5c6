//! Plausibility validation
//!
//! Sanity-checks a computed nutrition result and scores how trustworthy it
//! is. Checks only ever produce warnings and confidence penalties; hard
//! errors are reserved for calculation failures upstream.

use crate::models::{FoodDescriptor, NutritionInfo};

use super::cooking::ADDED_FAT_WARNING_THRESHOLD;
use super::normalize::food_key;
use super::tables::is_volume_incompatible;

/// Confidence every validation starts from
const BASE_CONFIDENCE: f64 = 0.8;
/// Clamp bounds for the final confidence score
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 1.0;

/// Tolerated relative gap between stated calories and macro-implied calories
const MACRO_MISMATCH_TOLERANCE: f64 = 0.2;

/// Context the calculator carries into validation
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext {
    pub cooking_multiplier: f64,
    pub unit_recognized: bool,
}

/// Validation outcome: heuristic warnings plus a clamped confidence score
#[derive(Debug, Clone)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub confidence: f64,
}

/// Run plausibility checks against a computed nutrition result
pub fn validate(
    nutrition: &NutritionInfo,
    descriptor: &FoodDescriptor,
    ctx: &ValidationContext,
) -> Validation {
    let mut warnings = Vec::new();
    let mut confidence = BASE_CONFIDENCE;

    if !ctx.unit_recognized {
        warnings.push(format!(
            "unrecognized unit '{}'; treated as a 1:1 serving match",
            descriptor.unit
        ));
        confidence -= 0.2;
    }

    if nutrition.calories > 2000.0 {
        warnings.push("very high calorie content for a single item".to_string());
        confidence -= 0.1;
    }

    if nutrition.calories < 5.0 && descriptor.quantity > 0.0 {
        warnings.push("very low calorie content".to_string());
        confidence -= 0.2;
    }

    let macro_calories = nutrition.macro_calories();
    if (nutrition.calories - macro_calories).abs() > MACRO_MISMATCH_TOLERANCE * nutrition.calories {
        warnings.push("macros don't match total calories".to_string());
        confidence -= 0.1;
    }

    let unit = descriptor.unit.to_lowercase();
    if (unit.trim() == "cups" || unit.trim() == "cup")
        && is_volume_incompatible(&food_key(&descriptor.name))
    {
        warnings.push(format!(
            "'{}' is usually measured by weight or count, not cups",
            descriptor.name
        ));
        confidence -= 0.1;
    }

    if ctx.cooking_multiplier > ADDED_FAT_WARNING_THRESHOLD {
        // Informational only, no confidence penalty
        warnings.push("cooking method adds significant calories from fat".to_string());
    }

    Validation {
        warnings,
        confidence: confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, quantity: f64, unit: &str) -> FoodDescriptor {
        FoodDescriptor::new(name, NutritionInfo::zero(), quantity, unit)
    }

    fn ok_ctx() -> ValidationContext {
        ValidationContext {
            cooking_multiplier: 1.0,
            unit_recognized: true,
        }
    }

    #[test]
    fn test_consistent_result_keeps_base_confidence() {
        // 330 kcal vs 312.8 macro kcal: inside the 20% band
        let n = NutritionInfo::new(330.0, 62.0, 0.0, 7.2);
        let v = validate(&n, &descriptor("chicken breast", 200.0, "grams"), &ok_ctx());
        assert!(v.warnings.is_empty());
        assert!((v.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_high_calorie_warning() {
        let n = NutritionInfo::new(2400.0, 150.0, 150.0, 120.0);
        let v = validate(&n, &descriptor("lasagna", 1000.0, "grams"), &ok_ctx());
        assert!(v.warnings.iter().any(|w| w.contains("very high")));
        assert!((v.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_low_calorie_warning() {
        let n = NutritionInfo::new(2.0, 0.1, 0.3, 0.0);
        let v = validate(&n, &descriptor("lettuce leaf", 1.0, "pieces"), &ok_ctx());
        assert!(v.warnings.iter().any(|w| w.contains("very low")));
        assert!((v.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_macro_mismatch_warning() {
        // 500 kcal stated, macros imply 90 kcal
        let n = NutritionInfo::new(500.0, 10.0, 10.0, 1.1);
        let v = validate(&n, &descriptor("protein bar", 1.0, "pieces"), &ok_ctx());
        assert!(v.warnings.iter().any(|w| w.contains("macros")));
        assert!((v.confidence - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_cups_of_chicken_flagged() {
        let n = NutritionInfo::new(300.0, 50.0, 0.0, 10.0);
        let v = validate(&n, &descriptor("chicken breast", 2.0, "cups"), &ok_ctx());
        assert!(v.warnings.iter().any(|w| w.contains("not cups")));
    }

    #[test]
    fn test_heavy_cooking_warning_has_no_penalty() {
        let n = NutritionInfo::new(400.0, 20.0, 30.0, 20.0);
        let ctx = ValidationContext {
            cooking_multiplier: 1.4,
            unit_recognized: true,
        };
        let v = validate(&n, &descriptor("chicken", 150.0, "grams"), &ctx);
        assert!(v.warnings.iter().any(|w| w.contains("fat")));
        assert!((v.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_never_below_floor() {
        // Stack every penalty at once
        let n = NutritionInfo::new(2.0, 50.0, 50.0, 50.0);
        let ctx = ValidationContext {
            cooking_multiplier: 1.8,
            unit_recognized: false,
        };
        let v = validate(&n, &descriptor("chicken", 1.0, "bushels"), &ctx);
        assert!(v.confidence >= 0.1);
        assert!(v.confidence <= 1.0);
    }
}
