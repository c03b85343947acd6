//! Energy balance aggregation
//!
//! Thermic effect of activity (TEA), thermic effect of food (TEF) and total
//! energy expenditure (TEE).

use crate::units::round2;

/// Fraction of the provisional total attributed to digesting food
pub const TEF_FRACTION: f64 = 0.10;

/// TEA = MET score × weight
pub fn thermic_effect_of_activity(met_score: f64, weight_kg: f64) -> f64 {
    round2(met_score * weight_kg)
}

/// TEF = 10% of the given basis
///
/// The report passes `bmr + tea`, i.e. a provisional total before TEF
/// itself is added.
pub fn thermic_effect_of_food(tee_basis: f64) -> f64 {
    round2(TEF_FRACTION * tee_basis)
}

/// TEE = BMR + TEA + TEF
pub fn total_energy_expenditure(bmr: f64, tea: f64, tef: f64) -> f64 {
    round2(bmr + tea + tef)
}
