//! Data models
//!
//! Serde value objects exchanged with the app shell (voice pipeline, UI,
//! storage collaborator).

mod food;
mod guess;
mod nutrition;

pub use food::{ConversionResult, FoodDescriptor, StoredFoodItem, UnitConversion};
pub use guess::{parse_food_guesses, FoodGuess, GuessError};
pub use nutrition::NutritionInfo;
