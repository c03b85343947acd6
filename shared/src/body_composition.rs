//! Body composition calculations
//!
//! BMI, lean body mass, basal metabolic rate and waist-to-hip ratio, along
//! with their classifications. Every value is rounded to two decimals before
//! it is returned, and classifiers expect those rounded values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{BiometricField, MetricsError};
use crate::units::round2;

// ============================================================================
// Gender
// ============================================================================

/// Gender as used by the sex-specific formulas
///
/// The formulas only distinguish male from everything else, so any value
/// other than "male" falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[default]
    Other,
}

impl Gender {
    /// Case-insensitive exact match on "male"; never fails
    ///
    /// Surrounding whitespace is not stripped, so " male" is `Other`.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

impl From<&str> for Gender {
    fn from(label: &str) -> Self {
        Gender::from_label(label)
    }
}

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BmiCategory {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity")]
    Obesity,
}

impl BmiCategory {
    /// Half-open BMI range `[lower, upper)` for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obesity => (30.0, f64::INFINITY),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)², rounded to two decimals.
/// Height must be a positive, finite number of meters.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64, MetricsError> {
    if !height_m.is_finite() || height_m <= 0.0 {
        return Err(MetricsError::invalid(
            BiometricField::Height,
            "must be a positive number of meters",
        ));
    }
    Ok(round2(weight_kg / (height_m * height_m)))
}

/// Classify an already-rounded BMI value
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

// ============================================================================
// Lean Body Mass and BMR
// ============================================================================

/// Estimate lean body mass
///
/// Men: LBM = 0.407 × weight + 0.267 × height − 19.2
/// Others: LBM = 0.252 × weight + 0.473 × height − 48.3
///
/// The coefficients are calibrated for height in centimeters. This function
/// uses `height` exactly as given; callers holding meters decide whether to
/// convert (see [`crate::units::LbmHeightBasis`]).
pub fn lean_body_mass(weight_kg: f64, height: f64, gender: Gender) -> f64 {
    let lbm = match gender {
        Gender::Male => 0.407 * weight_kg + 0.267 * height - 19.2,
        Gender::Other => 0.252 * weight_kg + 0.473 * height - 48.3,
    };
    round2(lbm)
}

/// Calculate Basal Metabolic Rate using the Cunningham equation
///
/// BMR = 500 + 22 × LBM(kg)
pub fn bmr(lean_body_mass: f64) -> f64 {
    round2(500.0 + 22.0 * lean_body_mass)
}

// ============================================================================
// Waist-to-Hip Ratio
// ============================================================================

/// WHR risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WhrRiskCategory {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl WhrRiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WhrRiskCategory::LowRisk => "Low Risk",
            WhrRiskCategory::AtRisk => "At Risk",
            WhrRiskCategory::HighRisk => "High Risk",
        }
    }
}

impl fmt::Display for WhrRiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate waist-to-hip ratio, rounded to two decimals
pub fn whr(waist_cm: f64, hip_cm: f64) -> Result<f64, MetricsError> {
    if !hip_cm.is_finite() || hip_cm <= 0.0 {
        return Err(MetricsError::invalid(
            BiometricField::Hip,
            "must be a positive number of centimeters",
        ));
    }
    Ok(round2(waist_cm / hip_cm))
}

/// Classify an already-rounded WHR value
///
/// | gender | Low Risk | At Risk       | High Risk |
/// |--------|----------|---------------|-----------|
/// | male   | < 0.90   | 0.90 ..= 0.99 | > 0.99    |
/// | other  | < 0.80   | 0.80 ..= 0.89 | > 0.89    |
pub fn classify_whr(whr: f64, gender: Gender) -> WhrRiskCategory {
    let (at_risk_from, at_risk_to) = match gender {
        Gender::Male => (0.90, 0.99),
        Gender::Other => (0.80, 0.89),
    };

    if whr < at_risk_from {
        WhrRiskCategory::LowRisk
    } else if whr <= at_risk_to {
        WhrRiskCategory::AtRisk
    } else {
        WhrRiskCategory::HighRisk
    }
}
