//! Shared nutrition data structure
//!
//! Used across food descriptors, conversion results, and stored food items.

use serde::{Deserialize, Serialize};

/// Nutritional information: calories plus the three macros in grams
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
}

impl NutritionInfo {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Create a new NutritionInfo with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale all values by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Add another nutrition to this one
    pub fn add(&self, other: &NutritionInfo) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }

    /// Round to display precision: whole calories, one decimal for macros
    pub fn rounded(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
        }
    }

    /// Calories implied by the macros alone (4 kcal/g protein and carbs, 9 kcal/g fat)
    pub fn macro_calories(&self) -> f64 {
        self.protein * 4.0 + self.carbs * 4.0 + self.fat * 9.0
    }

    /// True when every field is a finite, non-negative number
    pub fn is_well_formed(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl std::ops::Add for NutritionInfo {
    type Output = NutritionInfo;

    fn add(self, other: NutritionInfo) -> NutritionInfo {
        NutritionInfo::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutritionInfo {
    type Output = NutritionInfo;

    fn mul(self, multiplier: f64) -> NutritionInfo {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutritionInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionInfo::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        let n = NutritionInfo::new(165.0, 31.0, 0.0, 3.6);
        let doubled = n.scale(2.0);
        assert!((doubled.calories - 330.0).abs() < 1e-9);
        assert!((doubled.protein - 62.0).abs() < 1e-9);
        assert!((doubled.fat - 7.2).abs() < 1e-9);
    }

    #[test]
    fn test_sum_over_meal() {
        let total: NutritionInfo = vec![
            NutritionInfo::new(165.0, 31.0, 0.0, 3.6),
            NutritionInfo::new(130.0, 2.7, 28.0, 0.3),
        ]
        .into_iter()
        .sum();
        assert!((total.calories - 295.0).abs() < 1e-9);
        assert!((total.carbs - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_rounded() {
        let n = NutritionInfo::new(336.7, 6.993, 72.52, 1.0878).rounded();
        assert_eq!(n.calories, 337.0);
        assert_eq!(n.protein, 7.0);
        assert_eq!(n.carbs, 72.5);
        assert_eq!(n.fat, 1.1);
    }

    #[test]
    fn test_macro_calories() {
        let n = NutritionInfo::new(330.0, 62.0, 0.0, 7.2);
        assert!((n.macro_calories() - 312.8).abs() < 1e-9);
    }

    #[test]
    fn test_well_formed() {
        assert!(NutritionInfo::zero().is_well_formed());
        assert!(!NutritionInfo::new(f64::NAN, 0.0, 0.0, 0.0).is_well_formed());
        assert!(!NutritionInfo::new(100.0, -1.0, 0.0, 0.0).is_well_formed());
    }
}
