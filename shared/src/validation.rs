//! Input validation for the metrics engine
//!
//! Every required biometric must be present, finite and strictly positive
//! before any calculation runs. Checks run in field order and stop at the
//! first failure.

use serde::{Deserialize, Serialize};

use crate::body_composition::Gender;
use crate::errors::{BiometricField, MetricsError};

/// Biometric snapshot as supplied by the caller; any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBiometrics {
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(default, alias = "height")]
    pub height_m: Option<f64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "waist", alias = "waist_circ")]
    pub waist_cm: Option<f64>,
    #[serde(default, alias = "hip", alias = "hip_circ")]
    pub hip_cm: Option<f64>,
}

impl UserBiometrics {
    pub fn new(
        weight_kg: f64,
        height_m: f64,
        gender: impl Into<String>,
        waist_cm: f64,
        hip_cm: f64,
    ) -> Self {
        Self {
            weight_kg: Some(weight_kg),
            height_m: Some(height_m),
            gender: Some(gender.into()),
            waist_cm: Some(waist_cm),
            hip_cm: Some(hip_cm),
        }
    }

    /// Fields that are absent, in check order
    pub fn missing_fields(&self) -> Vec<BiometricField> {
        let mut missing = Vec::new();
        if self.weight_kg.is_none() {
            missing.push(BiometricField::Weight);
        }
        if self.height_m.is_none() {
            missing.push(BiometricField::Height);
        }
        if self.gender.is_none() {
            missing.push(BiometricField::Gender);
        }
        if self.waist_cm.is_none() {
            missing.push(BiometricField::Waist);
        }
        if self.hip_cm.is_none() {
            missing.push(BiometricField::Hip);
        }
        missing
    }
}

/// Biometrics that passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedBiometrics {
    pub weight_kg: f64,
    pub height_m: f64,
    pub gender: Gender,
    pub waist_cm: f64,
    pub hip_cm: f64,
}

/// Require a present, finite, strictly positive measurement
pub fn require_positive(field: BiometricField, value: Option<f64>) -> Result<f64, MetricsError> {
    let value = value.ok_or_else(|| MetricsError::missing(field))?;
    if value.is_nan() || value.is_infinite() {
        return Err(MetricsError::invalid(field, "must be a valid number"));
    }
    if value <= 0.0 {
        return Err(MetricsError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Validate a biometric snapshot
pub fn validate_biometrics(input: &UserBiometrics) -> Result<ValidatedBiometrics, MetricsError> {
    let weight_kg = require_positive(BiometricField::Weight, input.weight_kg)?;
    let height_m = require_positive(BiometricField::Height, input.height_m)?;
    let gender = input
        .gender
        .as_deref()
        .map(Gender::from_label)
        .ok_or_else(|| MetricsError::missing(BiometricField::Gender))?;
    let waist_cm = require_positive(BiometricField::Waist, input.waist_cm)?;
    let hip_cm = require_positive(BiometricField::Hip, input.hip_cm)?;

    Ok(ValidatedBiometrics {
        weight_kg,
        height_m,
        gender,
        waist_cm,
        hip_cm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> UserBiometrics {
        UserBiometrics::new(70.0, 1.75, "male", 85.0, 95.0)
    }

    #[test]
    fn test_complete_snapshot_validates() {
        let validated = validate_biometrics(&complete()).unwrap();
        assert_eq!(validated.weight_kg, 70.0);
        assert_eq!(validated.gender, Gender::Male);
    }

    #[test]
    fn test_missing_field_is_named() {
        let input = UserBiometrics {
            waist_cm: None,
            ..complete()
        };
        match validate_biometrics(&input) {
            Err(MetricsError::MissingInput { field }) => assert_eq!(field, BiometricField::Waist),
            other => panic!("expected missing waist, got {:?}", other),
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let input = UserBiometrics::default();
        let err = validate_biometrics(&input).unwrap_err();
        assert_eq!(err.field(), Some(BiometricField::Weight));
        assert_eq!(input.missing_fields().len(), 5);
    }

    #[test]
    fn test_missing_gender() {
        let input = UserBiometrics {
            gender: None,
            ..complete()
        };
        let err = validate_biometrics(&input).unwrap_err();
        assert!(matches!(
            err,
            MetricsError::MissingInput {
                field: BiometricField::Gender
            }
        ));
    }

    #[rstest]
    #[case(BiometricField::Height, 0.0)]
    #[case(BiometricField::Height, -1.7)]
    #[case(BiometricField::Hip, 0.0)]
    #[case(BiometricField::Weight, f64::NAN)]
    #[case(BiometricField::Waist, f64::INFINITY)]
    fn test_non_positive_or_non_finite_rejected(#[case] field: BiometricField, #[case] value: f64) {
        let mut input = complete();
        match field {
            BiometricField::Weight => input.weight_kg = Some(value),
            BiometricField::Height => input.height_m = Some(value),
            BiometricField::Waist => input.waist_cm = Some(value),
            BiometricField::Hip => input.hip_cm = Some(value),
            _ => unreachable!(),
        }
        match validate_biometrics(&input) {
            Err(MetricsError::InvalidInput { field: got, .. }) => assert_eq!(got, field),
            other => panic!("expected invalid {}, got {:?}", field, other),
        }
    }

    #[test]
    fn test_deserializes_profile_field_names() {
        let input: UserBiometrics = serde_json::from_str(
            r#"{"weight": 70, "height": 1.75, "gender": "male", "waist_circ": 85, "hip_circ": 95}"#,
        )
        .unwrap();
        assert_eq!(input, complete());
    }

    #[test]
    fn test_deserializes_nulls_as_missing() {
        let input: UserBiometrics =
            serde_json::from_str(r#"{"weight_kg": null, "height_m": 1.8}"#).unwrap();
        assert_eq!(
            input.missing_fields(),
            vec![
                BiometricField::Weight,
                BiometricField::Gender,
                BiometricField::Waist,
                BiometricField::Hip
            ]
        );
    }
}
