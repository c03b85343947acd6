//! Meal calories and daily intake
//!
//! Foods carry energy per 100 g plus the gram weight of each named portion.
//! A logged meal's calories scale the per-100 g energy by its portion weight,
//! and a day's intake is the plain sum of its meals.

use serde::{Deserialize, Serialize};
use std::iter::Sum;

use crate::errors::{BiometricField, MetricsError};

// ============================================================================
// Foods and Portions
// ============================================================================

/// Named portion size for a logged meal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortionSize {
    Small,
    Medium,
    Large,
}

impl std::str::FromStr for PortionSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(PortionSize::Small),
            "medium" => Ok(PortionSize::Medium),
            "large" => Ok(PortionSize::Large),
            _ => Err(format!("Unknown portion size: {}", s)),
        }
    }
}

/// Food reference entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    /// Energy per 100 g
    pub energy_kcal: f64,
    #[serde(default = "default_small_g")]
    pub portion_small_g: f64,
    #[serde(default = "default_medium_g")]
    pub portion_medium_g: f64,
    #[serde(default = "default_large_g")]
    pub portion_large_g: f64,
}

fn default_small_g() -> f64 {
    50.0
}

fn default_medium_g() -> f64 {
    100.0
}

fn default_large_g() -> f64 {
    150.0
}

impl FoodItem {
    /// Food with the standard 50/100/150 g portions
    pub fn new(name: impl Into<String>, energy_kcal: f64) -> Self {
        Self {
            name: name.into(),
            energy_kcal,
            portion_small_g: default_small_g(),
            portion_medium_g: default_medium_g(),
            portion_large_g: default_large_g(),
        }
    }

    /// Multiplier applied to per-100 g values
    ///
    /// Without a portion the per-100 g values are used as-is.
    pub fn portion_factor(&self, portion: Option<PortionSize>) -> f64 {
        match portion {
            Some(PortionSize::Small) => self.portion_small_g / 100.0,
            Some(PortionSize::Medium) => self.portion_medium_g / 100.0,
            Some(PortionSize::Large) => self.portion_large_g / 100.0,
            None => 1.0,
        }
    }
}

/// Calories for one meal of `food` at the given portion
pub fn meal_calories(food: &FoodItem, portion: Option<PortionSize>) -> f64 {
    food.energy_kcal * food.portion_factor(portion)
}

// ============================================================================
// Daily Intake
// ============================================================================

/// Total calories consumed in one day
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyCalorieIntake(f64);

impl DailyCalorieIntake {
    /// Wrap a pre-aggregated total; must be finite and non-negative
    pub fn new(total_kcal: f64) -> Result<Self, MetricsError> {
        if !total_kcal.is_finite() {
            return Err(MetricsError::invalid(
                BiometricField::DailyCalories,
                "must be a finite number",
            ));
        }
        if total_kcal < 0.0 {
            return Err(MetricsError::invalid(
                BiometricField::DailyCalories,
                "cannot be negative",
            ));
        }
        Ok(Self(total_kcal))
    }

    /// Sum per-meal calorie values
    pub fn from_meals<I>(meal_calories: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        meal_calories.into_iter().sum()
    }

    pub fn kcal(&self) -> f64 {
        self.0
    }
}

impl Sum<f64> for DailyCalorieIntake {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        Self(iter.sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn oats() -> FoodItem {
        FoodItem::new("Oats", 380.0)
    }

    #[rstest]
    #[case(Some(PortionSize::Small), 190.0)]
    #[case(Some(PortionSize::Medium), 380.0)]
    #[case(Some(PortionSize::Large), 570.0)]
    #[case(None, 380.0)]
    fn test_meal_calories_by_portion(#[case] portion: Option<PortionSize>, #[case] expected: f64) {
        assert!((meal_calories(&oats(), portion) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_custom_portion_weights() {
        let food = FoodItem {
            portion_large_g: 200.0,
            ..oats()
        };
        assert!((meal_calories(&food, Some(PortionSize::Large)) - 760.0).abs() < 1e-9);
    }

    #[test]
    fn test_food_item_deserializes_default_portions() {
        let food: FoodItem =
            serde_json::from_str(r#"{"name": "Rice", "energy_kcal": 130.0}"#).unwrap();
        assert_eq!(food.portion_small_g, 50.0);
        assert_eq!(food.portion_medium_g, 100.0);
        assert_eq!(food.portion_large_g, 150.0);
    }

    #[test]
    fn test_portion_size_parsing() {
        assert_eq!("Small".parse::<PortionSize>().unwrap(), PortionSize::Small);
        assert!("jumbo".parse::<PortionSize>().is_err());
    }

    #[test]
    fn test_daily_intake_sums_meals() {
        let intake = DailyCalorieIntake::from_meals([650.0, 820.5, 629.5]);
        assert_eq!(intake.kcal(), 2100.0);
    }

    #[test]
    fn test_daily_intake_without_meals_is_zero() {
        assert_eq!(DailyCalorieIntake::from_meals(Vec::new()).kcal(), 0.0);
    }

    #[test]
    fn test_daily_intake_rejects_negative_and_nan() {
        assert!(DailyCalorieIntake::new(-1.0).is_err());
        assert!(DailyCalorieIntake::new(f64::NAN).is_err());
        assert_eq!(DailyCalorieIntake::new(0.0).unwrap().kcal(), 0.0);
    }
}
