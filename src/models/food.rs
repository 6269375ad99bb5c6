//! Food boundary types
//!
//! Inputs and outputs of the calculation engine: the descriptor the UI/voice
//! flow builds per interaction, the validated conversion result it gets back,
//! the canonical stored form handed to the storage collaborator, and the
//! unit-choice entries driving picker lists.

use serde::{Deserialize, Serialize};

use super::NutritionInfo;

/// A food as described by the user: base nutrition plus the requested
/// quantity, unit, and optional cooking method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDescriptor {
    pub name: String,
    pub base_nutrition: NutritionInfo,
    pub quantity: f64,
    /// Free text ("grams", "cups", "pieces", "tbsp", ...)
    pub unit: String,
    /// Free text or absent ("fried", "grilled", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_method: Option<String>,
}

impl FoodDescriptor {
    pub fn new(
        name: impl Into<String>,
        base_nutrition: NutritionInfo,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_nutrition,
            quantity,
            unit: unit.into(),
            cooking_method: None,
        }
    }

    pub fn with_cooking_method(mut self, method: impl Into<String>) -> Self {
        self.cooking_method = Some(method.into());
        self
    }
}

/// Result of a nutrition calculation, including plausibility feedback
///
/// `is_valid` is true iff `errors` is empty; heuristic checks only ever add
/// warnings. `confidence` is always within [0.1, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    #[serde(flatten)]
    pub nutrition: NutritionInfo,
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub confidence: f64,
}

/// One unit choice for a food, used to drive UI picker lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConversion {
    pub unit: String,
    pub label: String,
    pub grams_per_unit: f64,
    /// Marks the unit judged most accurate for this food category
    pub is_recommended: bool,
}

/// Canonical persisted representation of a logged food
///
/// `nutrition` is per 100 g for weight-based entries and per piece for
/// count-based entries. `nutrition * quantity_multiplier` reconstructs the
/// total the user committed, within display rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFoodItem {
    pub nutrition: NutritionInfo,
    pub serving_size: f64,
    pub serving_size_unit: String,
    pub quantity_multiplier: f64,
}

impl StoredFoodItem {
    /// Total nutrition at the currently-set multiplier, display-rounded
    pub fn total_nutrition(&self) -> NutritionInfo {
        self.nutrition.scale(self.quantity_multiplier).rounded()
    }

    /// Recompute for an edited quantity multiplier without touching the baseline
    pub fn with_quantity_multiplier(&self, multiplier: f64) -> Self {
        Self {
            quantity_multiplier: multiplier,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builder() {
        let d = FoodDescriptor::new("rice", NutritionInfo::new(130.0, 2.7, 28.0, 0.3), 1.0, "cups")
            .with_cooking_method("fried");
        assert_eq!(d.cooking_method.as_deref(), Some("fried"));
    }

    #[test]
    fn test_conversion_result_serializes_flat() {
        let result = ConversionResult {
            nutrition: NutritionInfo::new(330.0, 62.0, 0.0, 7.2),
            is_valid: true,
            warnings: vec![],
            errors: vec![],
            confidence: 0.8,
        };
        let json = serde_json::to_value(&result).unwrap();
        // Nutrition fields sit at the top level, matching the pipeline shape
        assert_eq!(json["calories"], 330.0);
        assert_eq!(json["confidence"], 0.8);
        assert!(json.get("nutrition").is_none());
    }

    #[test]
    fn test_quantity_edit_recomputes_from_baseline() {
        let stored = StoredFoodItem {
            nutrition: NutritionInfo::new(165.0, 31.0, 0.0, 3.6),
            serving_size: 100.0,
            serving_size_unit: "g".to_string(),
            quantity_multiplier: 2.0,
        };
        let edited = stored.with_quantity_multiplier(3.0);
        assert_eq!(edited.total_nutrition().calories, 495.0);
        // Baseline untouched
        assert_eq!(edited.nutrition.calories, 165.0);
    }
}
