//! Health Metrics Shared Library
//!
//! The pure calculation engine behind the health metrics report, shared by
//! the backend service and the WASM bindings. Nothing in this crate performs
//! I/O or holds state.

pub mod activity_energy;
pub mod body_composition;
pub mod energy_balance;
pub mod errors;
pub mod nutrition;
pub mod report;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use activity_energy::{ActivityLevel, ActivitySample, Intensity};
pub use body_composition::{BmiCategory, Gender, WhrRiskCategory};
pub use errors::*;
pub use nutrition::{DailyCalorieIntake, FoodItem, PortionSize};
pub use report::{compute_health_metrics, HealthMetricsReport, MetricsOptions, MetricsRequest};
pub use units::{round2, LbmHeightBasis};
pub use validation::{UserBiometrics, ValidatedBiometrics};
