//! Unit suggestions
//!
//! Builds the per-food unit choice list the UI renders when the user edits a
//! quantity. Units backed by a table hit are offered with their real gram
//! weights; exactly one entry is marked recommended, by how the food is most
//! naturally measured (pieces, then cups, then milliliters, then grams).

use crate::models::UnitConversion;

use super::normalize::food_key;
use super::tables::{
    cup_grams, liquid_density, piece_grams, G_PER_OZ, TBSP_PER_CUP, TSP_PER_CUP,
};

/// Build the unit choice list for a food name
pub fn unit_suggestions(food_name: &str) -> Vec<UnitConversion> {
    let key = food_key(food_name);
    let per_piece = piece_grams(&key);
    let per_cup = cup_grams(&key);
    let density = liquid_density(&key);

    let mut suggestions = Vec::new();

    if let Some(grams) = per_piece {
        suggestions.push(UnitConversion {
            unit: "pieces".to_string(),
            label: format!("pieces (~{grams:.0} g each)"),
            grams_per_unit: grams,
            is_recommended: true,
        });
    }

    if let Some(grams) = per_cup {
        let recommend_cup = per_piece.is_none();
        suggestions.push(UnitConversion {
            unit: "cups".to_string(),
            label: format!("cups (~{grams:.0} g)"),
            grams_per_unit: grams,
            is_recommended: recommend_cup,
        });
        suggestions.push(UnitConversion {
            unit: "tbsp".to_string(),
            label: "tablespoons".to_string(),
            grams_per_unit: grams / TBSP_PER_CUP,
            is_recommended: false,
        });
        suggestions.push(UnitConversion {
            unit: "tsp".to_string(),
            label: "teaspoons".to_string(),
            grams_per_unit: grams / TSP_PER_CUP,
            is_recommended: false,
        });
    }

    if let Some(grams_per_ml) = density {
        suggestions.push(UnitConversion {
            unit: "ml".to_string(),
            label: "milliliters (ml)".to_string(),
            grams_per_unit: grams_per_ml,
            is_recommended: per_piece.is_none() && per_cup.is_none(),
        });
    }

    let nothing_matched = suggestions.is_empty();
    suggestions.push(UnitConversion {
        unit: "grams".to_string(),
        label: "grams (g)".to_string(),
        grams_per_unit: 1.0,
        is_recommended: nothing_matched,
    });
    suggestions.push(UnitConversion {
        unit: "oz".to_string(),
        label: "ounces (oz)".to_string(),
        grams_per_unit: G_PER_OZ,
        is_recommended: false,
    });

    suggestions
}
