//! Voice-pipeline food guesses
//!
//! Shape of the payload produced by the transcription + LLM extraction
//! services. The engine only consumes this shape; the network calls that
//! produce it live outside the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::NutritionInfo;

/// Error parsing a pipeline payload
#[derive(Debug, Error)]
pub enum GuessError {
    #[error("malformed food guess payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("food guess '{name}' has non-finite or negative nutrition values")]
    BadNutrition { name: String },
}

/// One food guessed from a spoken meal description
///
/// The nutrition fields are the total for the guessed quantity/unit, not
/// per-100g. `needs_quantity`/`needs_cooking_method` flag follow-up prompts
/// the UI should show before committing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodGuess {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub confidence: f64,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub cooking_method: Option<String>,
    #[serde(default)]
    pub needs_quantity: bool,
    #[serde(default)]
    pub needs_cooking_method: bool,
}

impl FoodGuess {
    /// The guessed total nutrition as a value object
    pub fn total_nutrition(&self) -> NutritionInfo {
        NutritionInfo::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Quantity and unit with the documented defaults (1 piece) applied
    pub fn quantity_and_unit(&self) -> (f64, &str) {
        (
            self.quantity.unwrap_or(1.0),
            self.unit.as_deref().unwrap_or("piece"),
        )
    }
}

/// Parse a JSON array of food guesses from the extraction service
///
/// Rejects guesses whose nutrition values are non-finite or negative rather
/// than letting them reach the calculator.
pub fn parse_food_guesses(json: &str) -> Result<Vec<FoodGuess>, GuessError> {
    let guesses: Vec<FoodGuess> = serde_json::from_str(json)?;
    for guess in &guesses {
        if !guess.total_nutrition().is_well_formed() {
            return Err(GuessError::BadNutrition {
                name: guess.name.clone(),
            });
        }
    }
    Ok(guesses)
}
