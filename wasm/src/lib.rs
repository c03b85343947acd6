//! Health Metrics WASM Module
//!
//! WebAssembly bindings so browser clients can compute the same report as
//! the backend without a round trip.

use health_metrics_shared::body_composition::{self, Gender};
use health_metrics_shared::{activity_energy, LbmHeightBasis, MetricsOptions, MetricsRequest};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Error payload returned to JavaScript callers
#[derive(Debug, Serialize)]
struct BindingError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
}

/// Compute the full report from a JSON request, returning report JSON
///
/// `lbm_height_basis` accepts "as_provided" (default) or "centimeters".
#[wasm_bindgen]
pub fn compute_health_metrics(
    request_json: &str,
    lbm_height_basis: Option<String>,
) -> Result<String, JsValue> {
    compute_report_json(request_json, lbm_height_basis.as_deref())
        .map_err(|err| JsValue::from_str(&err))
}

/// Calculate BMI from weight (kg) and height (m), rounded to two decimals
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<f64, JsValue> {
    body_composition::bmi(weight_kg, height_m).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// BMI category label for an already-rounded BMI
#[wasm_bindgen]
pub fn classify_bmi_label(bmi: f64) -> String {
    body_composition::classify_bmi(bmi).label().to_string()
}

/// WHR risk label for an already-rounded WHR and a gender string
#[wasm_bindgen]
pub fn classify_whr_label(whr: f64, gender: &str) -> String {
    body_composition::classify_whr(whr, Gender::from_label(gender))
        .label()
        .to_string()
}

/// MET score for one activity
#[wasm_bindgen]
pub fn calculate_met_score(weight_kg: f64, duration_minutes: u32, intensity: &str) -> f64 {
    activity_energy::met_score(weight_kg, duration_minutes, intensity)
}

fn compute_report_json(request_json: &str, lbm_height_basis: Option<&str>) -> Result<String, String> {
    let mut options = MetricsOptions::default();
    if let Some(basis) = lbm_height_basis {
        options.lbm_height_basis = basis.parse::<LbmHeightBasis>().map_err(|message| {
            error_json(BindingError {
                message,
                field: None,
            })
        })?;
    }

    let report = MetricsRequest::from_json(request_json)
        .and_then(|request| request.compute(&options))
        .map_err(|err| {
            error_json(BindingError {
                message: err.to_string(),
                field: err.field().map(|f| f.to_string()),
            })
        })?;

    serde_json::to_string(&report).map_err(|err| err.to_string())
}

fn error_json(error: BindingError) -> String {
    serde_json::to_string(&error).unwrap_or(error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const REQUEST: &str = r#"{
        "weight": 70, "height": 1.75, "gender": "male", "waist": 85, "hip": 95,
        "activity": {"duration": 45, "intensity": "moderate"},
        "daily_calories": 2100
    }"#;

    #[test]
    fn test_compute_report_json() {
        let json: Value = serde_json::from_str(&compute_report_json(REQUEST, None).unwrap()).unwrap();
        assert_eq!(json["BMI"], 22.86);
        assert_eq!(json["BMI Category"], "Normal weight");
        assert_eq!(json["WHR Risk Category"], "Low Risk");
    }

    #[test]
    fn test_compute_report_json_with_centimeter_basis() {
        let json: Value =
            serde_json::from_str(&compute_report_json(REQUEST, Some("centimeters")).unwrap()).unwrap();
        assert!(json["Lean Body Mass"].as_f64().unwrap() > 50.0);
    }

    #[test]
    fn test_missing_field_reported() {
        let err = compute_report_json(r#"{"weight": 70, "height": 1.75}"#, None).unwrap_err();
        let json: Value = serde_json::from_str(&err).unwrap();
        assert_eq!(json["field"], "gender");
    }

    #[test]
    fn test_null_intensity_accepted() {
        let request = REQUEST.replace(r#""intensity": "moderate""#, r#""intensity": null"#);
        let with_null: Value = serde_json::from_str(&compute_report_json(&request, None).unwrap()).unwrap();
        let with_key: Value = serde_json::from_str(&compute_report_json(REQUEST, None).unwrap()).unwrap();
        assert_eq!(with_null, with_key);
    }

    #[test]
    fn test_unknown_basis_rejected() {
        assert!(compute_report_json(REQUEST, Some("inches")).is_err());
    }

    #[test]
    fn test_label_helpers() {
        assert_eq!(classify_bmi_label(31.0), "Obesity");
        assert_eq!(classify_whr_label(0.95, "male"), "At Risk");
        assert_eq!(classify_whr_label(0.95, "female"), "High Risk");
        assert_eq!(calculate_met_score(70.0, 30, "sprint"), 7350.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn compute_health_metrics_binding_returns_json() {
        let json = compute_health_metrics(
            r#"{"weight": 70, "height": 1.75, "gender": "male", "waist": 85, "hip": 95}"#,
            None,
        )
        .unwrap();
        assert!(json.contains("\"BMI\":22.86"));
    }

    #[wasm_bindgen_test]
    fn calculate_bmi_rejects_zero_height() {
        assert!(calculate_bmi(70.0, 0.0).is_err());
    }
}
