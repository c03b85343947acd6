//! Activity energy calculations
//!
//! MET scores, calories burned and activity level classification for a
//! single logged activity.
//!
//! The "MET score" here is not a bare MET value. It already folds weight and
//! duration into the coefficient, and `calories_burned` multiplies by weight
//! and duration a second time. This differs from the textbook
//! `MET × weight(kg) × hours` and is kept so existing reports stay comparable.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::units::round2;

/// Intensity assumed when no activity has been logged
pub const DEFAULT_INTENSITY: &str = "moderate";

/// MET coefficient for intensity keys outside the known table
pub const FALLBACK_MET_COEFFICIENT: f64 = 3.5;

/// MET-minute threshold where activity becomes Moderate
pub const MODERATE_MET_MINUTES: f64 = 600.0;

/// MET-minute threshold where activity becomes High
pub const HIGH_MET_MINUTES: f64 = 1500.0;

// ============================================================================
// Activity Input
// ============================================================================

/// One logged activity: how long and how hard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    /// Duration in whole minutes
    #[serde(default, alias = "duration")]
    pub duration_minutes: u32,
    /// Free-form intensity key, matched case-insensitively
    #[serde(default = "default_intensity", deserialize_with = "intensity_or_default")]
    pub intensity: String,
}

fn default_intensity() -> String {
    DEFAULT_INTENSITY.to_string()
}

/// An explicit `null` intensity means the same as an absent one
fn intensity_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_intensity))
}

impl Default for ActivitySample {
    fn default() -> Self {
        Self {
            duration_minutes: 0,
            intensity: default_intensity(),
        }
    }
}

impl ActivitySample {
    pub fn new(duration_minutes: u32, intensity: impl Into<String>) -> Self {
        Self {
            duration_minutes,
            intensity: intensity.into(),
        }
    }

    /// Placeholder sample used when nothing was logged
    pub fn idle(intensity: impl Into<String>) -> Self {
        Self::new(0, intensity)
    }
}

// ============================================================================
// Intensity
// ============================================================================

/// Known intensity keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Walking,
    Moderate,
    Vigorous,
    /// Any key outside the table
    Unrecognized,
}

impl Intensity {
    /// Case-insensitive lookup; unknown keys map to `Unrecognized`
    pub fn from_key(key: &str) -> Self {
        match key.to_lowercase().as_str() {
            "walking" => Intensity::Walking,
            "moderate" => Intensity::Moderate,
            "vigorous" => Intensity::Vigorous,
            _ => Intensity::Unrecognized,
        }
    }

    pub fn met_coefficient(&self) -> f64 {
        match self {
            Intensity::Walking => 3.3,
            Intensity::Moderate => 4.0,
            Intensity::Vigorous => 8.0,
            Intensity::Unrecognized => FALLBACK_MET_COEFFICIENT,
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Physical activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Calculations
// ============================================================================

/// MET score: coefficient × weight × duration, rounded to two decimals
pub fn met_score(weight_kg: f64, duration_minutes: u32, intensity: &str) -> f64 {
    let coefficient = Intensity::from_key(intensity).met_coefficient();
    round2(coefficient * weight_kg * f64::from(duration_minutes))
}

/// Calories burned: MET score × duration × weight, rounded to two decimals
pub fn calories_burned(met_score: f64, duration_minutes: u32, weight_kg: f64) -> f64 {
    round2(met_score * f64::from(duration_minutes) * weight_kg)
}

/// Classify activity level from MET minutes
///
/// Callers pass `met_score × duration`.
pub fn classify_activity_level(met_minutes: f64) -> ActivityLevel {
    if met_minutes < MODERATE_MET_MINUTES {
        ActivityLevel::Low
    } else if met_minutes < HIGH_MET_MINUTES {
        ActivityLevel::Moderate
    } else {
        ActivityLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_activity_sample_default() {
        let sample = ActivitySample::default();
        assert_eq!(sample.duration_minutes, 0);
        assert_eq!(sample.intensity, "moderate");
    }

    #[test]
    fn test_activity_sample_deserializes_with_defaults() {
        let sample: ActivitySample = serde_json::from_str(r#"{"duration": 20}"#).unwrap();
        assert_eq!(sample, ActivitySample::new(20, "moderate"));
    }

    #[test]
    fn test_activity_sample_null_intensity_uses_default() {
        let sample: ActivitySample =
            serde_json::from_str(r#"{"duration": 45, "intensity": null}"#).unwrap();
        assert_eq!(sample, ActivitySample::new(45, "moderate"));
    }

    #[rstest]
    #[case("walking", 3.3)]
    #[case("Moderate", 4.0)]
    #[case("VIGOROUS", 8.0)]
    #[case("sprint", 3.5)]
    #[case("", 3.5)]
    fn test_met_coefficient_lookup(#[case] key: &str, #[case] expected: f64) {
        assert_eq!(Intensity::from_key(key).met_coefficient(), expected);
    }

    #[test]
    fn test_met_score_vigorous() {
        assert_eq!(met_score(70.0, 30, "vigorous"), 16800.0);
    }

    #[test]
    fn test_met_score_unrecognized_intensity_falls_back() {
        assert_eq!(met_score(70.0, 30, "sprint"), 7350.0);
    }

    #[test]
    fn test_met_score_is_case_insensitive() {
        assert_eq!(met_score(70.0, 30, "Walking"), met_score(70.0, 30, "walking"));
        assert_eq!(met_score(70.0, 30, "walking"), 6930.0);
    }

    #[test]
    fn test_zero_duration_gives_zero_met_score() {
        assert_eq!(met_score(70.0, 0, "vigorous"), 0.0);
    }

    #[test]
    fn test_calories_burned_zero_met_score() {
        assert_eq!(calories_burned(0.0, 30, 70.0), 0.0);
    }

    #[test]
    fn test_calories_burned_multiplies_weight_and_duration_again() {
        // moderate: 4.0 * 70 * 30 = 8400, then 8400 * 30 * 70
        let score = met_score(70.0, 30, "moderate");
        assert_eq!(score, 8400.0);
        assert_eq!(calories_burned(score, 30, 70.0), 17_640_000.0);
    }

    #[rstest]
    #[case(0.0, ActivityLevel::Low)]
    #[case(599.0, ActivityLevel::Low)]
    #[case(599.99, ActivityLevel::Low)]
    #[case(600.0, ActivityLevel::Moderate)]
    #[case(1499.0, ActivityLevel::Moderate)]
    #[case(1500.0, ActivityLevel::High)]
    #[case(567_000.0, ActivityLevel::High)]
    fn test_activity_level_boundaries(#[case] met_minutes: f64, #[case] expected: ActivityLevel) {
        assert_eq!(classify_activity_level(met_minutes), expected);
    }

    #[test]
    fn test_activity_level_serializes_as_label() {
        assert_eq!(serde_json::to_string(&ActivityLevel::High).unwrap(), "\"High\"");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: vigorous never scores below walking for the same session
        #[test]
        fn prop_vigorous_beats_walking(weight in 30.0f64..200.0, duration in 1u32..240) {
            prop_assert!(met_score(weight, duration, "vigorous") > met_score(weight, duration, "walking"));
        }

        /// Property: activity level never drops as MET minutes grow
        #[test]
        fn prop_activity_level_monotonic(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_activity_level(low) <= classify_activity_level(high));
        }
    }
}
