//! Service error handling
//!
//! Errors surfaced to whatever layer sits in front of the service. Each
//! variant maps to a stable machine-readable code so callers can pick their
//! own user-facing behaviour (reject, warn, partial data).

use health_metrics_shared::{BiometricField, MetricsError};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

/// Errors returned by the metrics service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Data source error")]
    DataSource(#[from] anyhow::Error),
}

/// Error detail suitable for serialising back to a caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<BiometricField>,
}

impl ServiceError {
    /// Stable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Metrics(MetricsError::MissingInput { .. }) => "MISSING_INPUT",
            ServiceError::Metrics(MetricsError::InvalidInput { .. }) => "INVALID_INPUT",
            ServiceError::Metrics(MetricsError::MalformedRequest(_)) => "BAD_REQUEST",
            ServiceError::UserNotFound(_) => "NOT_FOUND",
            ServiceError::DataSource(_) => "DATA_SOURCE_ERROR",
        }
    }

    /// True when the caller supplied bad or incomplete data
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::DataSource(_))
    }

    pub fn detail(&self) -> ErrorDetail {
        let message = match self {
            ServiceError::DataSource(err) => {
                error!("Data source error: {:?}", err);
                "Health data could not be loaded".to_string()
            }
            other => other.to_string(),
        };

        ErrorDetail {
            code: self.code(),
            message,
            field: match self {
                ServiceError::Metrics(err) => err.field(),
                _ => None,
            },
        }
    }
}

/// Result type alias for service calls
pub type ServiceResult<T> = Result<T, ServiceError>;
