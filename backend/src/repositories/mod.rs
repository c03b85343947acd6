//! Health data repositories
//!
//! The metrics service reads its inputs through [`HealthDataSource`]. Storage
//! lives outside this crate; an in-memory implementation is provided for the
//! CLI and for tests.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use health_metrics_shared::{ActivitySample, DailyCalorieIntake, UserBiometrics};
use uuid::Uuid;

pub use memory::{ActivityRecord, HealthDataSnapshot, InMemoryHealthDataSource, MealRecord, UserRecord};

/// Read-only access to the data the metrics report is built from
#[async_trait]
pub trait HealthDataSource: Send + Sync {
    /// Biometric profile of a user, or `None` if the user does not exist
    async fn get_biometrics(&self, user_id: Uuid) -> Result<Option<UserBiometrics>>;

    /// Most recently logged activity, if any
    async fn latest_activity(&self, user_id: Uuid) -> Result<Option<ActivitySample>>;

    /// Calories from meals logged on `date` (UTC)
    async fn daily_calories(&self, user_id: Uuid, date: NaiveDate) -> Result<DailyCalorieIntake>;
}
