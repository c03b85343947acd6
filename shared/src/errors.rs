//! Error types for the health metrics engine

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input field the engine reads from a user's biometric snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricField {
    Weight,
    Height,
    Gender,
    Waist,
    Hip,
    DailyCalories,
}

impl BiometricField {
    /// Field name as it appears in requests and snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            BiometricField::Weight => "weight",
            BiometricField::Height => "height",
            BiometricField::Gender => "gender",
            BiometricField::Waist => "waist",
            BiometricField::Hip => "hip",
            BiometricField::DailyCalories => "daily_calories",
        }
    }
}

impl fmt::Display for BiometricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while computing health metrics
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Missing input: {field}")]
    MissingInput { field: BiometricField },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        field: BiometricField,
        reason: String,
    },

    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

impl MetricsError {
    pub fn missing(field: BiometricField) -> Self {
        MetricsError::MissingInput { field }
    }

    pub fn invalid(field: BiometricField, reason: impl Into<String>) -> Self {
        MetricsError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<BiometricField> {
        match self {
            MetricsError::MissingInput { field } | MetricsError::InvalidInput { field, .. } => {
                Some(*field)
            }
            MetricsError::MalformedRequest(_) => None,
        }
    }
}
