//! Nutrition normalization and unit-conversion engine
//!
//! Core calculation library for a voice-driven calorie tracker: converts
//! loosely-specified food descriptions (arbitrary quantity/unit, optional
//! cooking method, Arabic or English food names) into calorie/macro values,
//! sanity-checks them for plausibility, and round-trips between user-facing
//! quantities and the canonical per-100g/per-piece storage form.

pub mod models;
pub mod nutrition;

pub use models::{
    parse_food_guesses, ConversionResult, FoodDescriptor, FoodGuess, GuessError, NutritionInfo,
    StoredFoodItem, UnitConversion,
};
pub use nutrition::{
    calculate_nutrition, cooking_multiplier, display_quantity, food_key, quantity_multiplier,
    to_stored_form, unit_suggestions,
};
