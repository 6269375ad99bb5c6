//! Nutrition calculation
//!
//! Composes the quantity multiplier, cooking multiplier, and validator into
//! the single entry point the app calls per food. Failures never escape as
//! `Err` or panics; malformed input degrades into a low-confidence result
//! carrying the unadjusted base nutrition.

use thiserror::Error;
use tracing::warn;

use crate::models::{ConversionResult, FoodDescriptor, NutritionInfo};

use super::converter::quantity_multiplier;
use super::cooking::cooking_multiplier;
use super::normalize::food_key;
use super::validator::{validate, ValidationContext};

/// Internal calculation failures, reported to callers as data
#[derive(Debug, Error)]
enum CalcError {
    #[error("quantity must be a positive number")]
    NonPositiveQuantity,

    #[error("base nutrition values must be finite and non-negative")]
    MalformedNutrition,
}

/// Confidence assigned to a degraded fallback result
const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Calculate nutrition for a food descriptor
///
/// Scales the descriptor's base nutrition (per 100 reference units) to the
/// requested quantity, unit, and cooking method, rounds to display precision,
/// and attaches plausibility warnings and a confidence score.
///
/// Fat picks up the cooking multiplier twice: frying adds oil, and oil is
/// essentially pure fat, so the fat gram value grows faster than calories do.
pub fn calculate_nutrition(descriptor: &FoodDescriptor) -> ConversionResult {
    match try_calculate(descriptor) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                "Nutrition calculation failed for '{}': {}",
                descriptor.name, err
            );
            fallback_result(descriptor, &err)
        }
    }
}

fn try_calculate(descriptor: &FoodDescriptor) -> Result<ConversionResult, CalcError> {
    if !descriptor.quantity.is_finite() || descriptor.quantity <= 0.0 {
        return Err(CalcError::NonPositiveQuantity);
    }
    if !descriptor.base_nutrition.is_well_formed() {
        return Err(CalcError::MalformedNutrition);
    }

    let key = food_key(&descriptor.name);
    let conversion = quantity_multiplier(&key, descriptor.quantity, &descriptor.unit);
    let cooking = cooking_multiplier(descriptor.cooking_method.as_deref());
    let final_multiplier = conversion.multiplier * cooking;

    let base = &descriptor.base_nutrition;
    let nutrition = NutritionInfo {
        calories: base.calories * final_multiplier,
        protein: base.protein * final_multiplier,
        carbs: base.carbs * final_multiplier,
        fat: base.fat * cooking * final_multiplier,
    }
    .rounded();

    let validation = validate(
        &nutrition,
        descriptor,
        &ValidationContext {
            cooking_multiplier: cooking,
            unit_recognized: conversion.unit_recognized,
        },
    );

    Ok(ConversionResult {
        nutrition,
        is_valid: true,
        warnings: validation.warnings,
        errors: vec![],
        confidence: validation.confidence,
    })
}

/// Degraded result: the base nutrition unchanged, marked invalid
fn fallback_result(descriptor: &FoodDescriptor, err: &CalcError) -> ConversionResult {
    ConversionResult {
        nutrition: descriptor.base_nutrition.clone(),
        is_valid: false,
        warnings: vec![],
        errors: vec![format!("nutrition calculation failed: {err}")],
        confidence: FALLBACK_CONFIDENCE,
    }
}
