//! Nutrition calculation engine
//!
//! Handles food-name normalization, quantity/unit conversion, cooking-method
//! multipliers, plausibility validation, and serving normalization.

pub mod calculator;
pub mod converter;
pub mod cooking;
pub mod normalize;
pub mod serving;
pub mod suggestions;
pub mod tables;
pub mod validator;

pub use calculator::calculate_nutrition;
pub use converter::{quantity_multiplier, QuantityConversion};
pub use cooking::cooking_multiplier;
pub use normalize::food_key;
pub use serving::{display_quantity, to_stored_form};
pub use suggestions::unit_suggestions;
pub use validator::{validate, Validation, ValidationContext};
