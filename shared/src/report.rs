//! Health metrics report
//!
//! Chains the individual calculators in dependency order and assembles the
//! flat report handed back to callers:
//!
//! ```text
//! BMI ──> BMI category
//! LBM ──> BMR ─────────────┐
//! MET score ──> TEA ───────┼──> TEF ──> TEE
//!     ├──> calories burned │
//!     └──> activity level  │
//! WHR ──> WHR risk         │
//! ```
//!
//! Inputs are validated before anything is computed, so a call either
//! returns every field or fails.

use serde::{Deserialize, Serialize};

use crate::activity_energy::{
    calories_burned, classify_activity_level, met_score, ActivityLevel, ActivitySample,
    DEFAULT_INTENSITY,
};
use crate::body_composition::{
    bmi, bmr, classify_bmi, classify_whr, lean_body_mass, whr, BmiCategory, WhrRiskCategory,
};
use crate::energy_balance::{
    thermic_effect_of_activity, thermic_effect_of_food, total_energy_expenditure,
};
use crate::errors::MetricsError;
use crate::nutrition::DailyCalorieIntake;
use crate::units::{round2, LbmHeightBasis};
use crate::validation::{validate_biometrics, UserBiometrics};

/// Knobs that change how the report is computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsOptions {
    /// Unit of the height passed into the LBM formula
    pub lbm_height_basis: LbmHeightBasis,
    /// Intensity assumed when no activity was logged
    pub default_intensity: String,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            lbm_height_basis: LbmHeightBasis::default(),
            default_intensity: DEFAULT_INTENSITY.to_string(),
        }
    }
}

/// Derived health metrics for one user on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetricsReport {
    #[serde(rename = "BMI")]
    pub bmi: f64,
    #[serde(rename = "BMI Category")]
    pub bmi_category: BmiCategory,
    #[serde(rename = "Lean Body Mass")]
    pub lean_body_mass: f64,
    #[serde(rename = "BMR")]
    pub bmr: f64,
    #[serde(rename = "MET Score")]
    pub met_score: f64,
    #[serde(rename = "Calories Burned")]
    pub calories_burned: f64,
    #[serde(rename = "Activity Level")]
    pub activity_level: ActivityLevel,
    #[serde(rename = "WHR")]
    pub whr: f64,
    #[serde(rename = "WHR Risk Category")]
    pub whr_risk_category: WhrRiskCategory,
    #[serde(rename = "TEA")]
    pub tea: f64,
    #[serde(rename = "TEF")]
    pub tef: f64,
    #[serde(rename = "TEE")]
    pub tee: f64,
    #[serde(rename = "Total calories consumed today")]
    pub total_calories_today: f64,
}

/// Compute the full report
///
/// A missing activity is replaced by a zero-minute sample at
/// `options.default_intensity`.
pub fn compute_health_metrics(
    biometrics: &UserBiometrics,
    activity: Option<&ActivitySample>,
    intake: DailyCalorieIntake,
    options: &MetricsOptions,
) -> Result<HealthMetricsReport, MetricsError> {
    let input = validate_biometrics(biometrics)?;
    let intake = DailyCalorieIntake::new(intake.kcal())?;

    let idle;
    let activity = match activity {
        Some(sample) => sample,
        None => {
            idle = ActivitySample::idle(options.default_intensity.clone());
            &idle
        }
    };
    let duration = activity.duration_minutes;

    // Body composition
    let bmi = bmi(input.weight_kg, input.height_m)?;
    let bmi_category = classify_bmi(bmi);
    let lbm = lean_body_mass(
        input.weight_kg,
        options.lbm_height_basis.height_for_lbm(input.height_m),
        input.gender,
    );
    let bmr = bmr(lbm);

    // Activity energy
    let met = met_score(input.weight_kg, duration, &activity.intensity);
    let burned = calories_burned(met, duration, input.weight_kg);
    let activity_level = classify_activity_level(met * f64::from(duration));

    // Waist-to-hip
    let whr = whr(input.waist_cm, input.hip_cm)?;
    let whr_risk_category = classify_whr(whr, input.gender);

    // Energy balance
    let tea = thermic_effect_of_activity(met, input.weight_kg);
    let tef = thermic_effect_of_food(bmr + tea);
    let tee = total_energy_expenditure(bmr, tea, tef);

    Ok(HealthMetricsReport {
        bmi,
        bmi_category,
        lean_body_mass: lbm,
        bmr,
        met_score: met,
        calories_burned: burned,
        activity_level,
        whr,
        whr_risk_category,
        tea,
        tef,
        tee,
        total_calories_today: round2(intake.kcal()),
    })
}

/// Self-contained request: biometrics, an optional activity and the day's calories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsRequest {
    #[serde(flatten)]
    pub biometrics: UserBiometrics,
    #[serde(default)]
    pub activity: Option<ActivitySample>,
    #[serde(default)]
    pub daily_calories: f64,
}

impl MetricsRequest {
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn compute(&self, options: &MetricsOptions) -> Result<HealthMetricsReport, MetricsError> {
        let intake = DailyCalorieIntake::new(self.daily_calories)?;
        compute_health_metrics(&self.biometrics, self.activity.as_ref(), intake, options)
    }
}
