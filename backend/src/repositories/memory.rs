//! In-memory health data source
//!
//! Holds users, activity logs and meal logs in `RwLock`-guarded maps. Can be
//! seeded from a JSON snapshot of one user's data.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use health_metrics_shared::activity_energy::DEFAULT_INTENSITY;
use health_metrics_shared::nutrition::meal_calories;
use health_metrics_shared::{
    ActivitySample, DailyCalorieIntake, FoodItem, PortionSize, UserBiometrics,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::HealthDataSource;

/// User profile record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(flatten)]
    pub biometrics: UserBiometrics,
}

/// Logged activity record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "type", default)]
    pub activity_type: String,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub intensity: Option<String>,
    pub logged_at: DateTime<Utc>,
}

impl ActivityRecord {
    /// Activity sample for the metrics engine; a blank intensity becomes "moderate"
    pub fn to_sample(&self) -> ActivitySample {
        let intensity = self
            .intensity
            .clone()
            .unwrap_or_else(|| DEFAULT_INTENSITY.to_string());
        ActivitySample::new(self.duration_minutes, intensity)
    }
}

/// Logged meal record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecord {
    pub calories: f64,
    pub logged_at: DateTime<Utc>,
}

impl MealRecord {
    /// Meal whose calories come from a food item and portion
    pub fn from_food(food: &FoodItem, portion: Option<PortionSize>, logged_at: DateTime<Utc>) -> Self {
        Self {
            calories: meal_calories(food, portion),
            logged_at,
        }
    }
}

/// One user's data as exported by the surrounding application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDataSnapshot {
    pub user: UserRecord,
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    #[serde(default)]
    pub meals: Vec<MealRecord>,
}

impl HealthDataSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid health data snapshot")
    }
}

/// Health data source backed by in-process maps
#[derive(Debug, Default)]
pub struct InMemoryHealthDataSource {
    users: RwLock<HashMap<Uuid, UserBiometrics>>,
    activities: RwLock<HashMap<Uuid, Vec<ActivityRecord>>>,
    meals: RwLock<HashMap<Uuid, Vec<MealRecord>>>,
}

impl InMemoryHealthDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a source with a single user's snapshot
    pub fn from_snapshot(snapshot: HealthDataSnapshot) -> Self {
        let user_id = snapshot.user.id;
        Self {
            users: RwLock::new(HashMap::from([(user_id, snapshot.user.biometrics)])),
            activities: RwLock::new(HashMap::from([(user_id, snapshot.activities)])),
            meals: RwLock::new(HashMap::from([(user_id, snapshot.meals)])),
        }
    }

    /// Insert or replace a user's biometrics
    pub async fn upsert_user(&self, user_id: Uuid, biometrics: UserBiometrics) {
        self.users.write().await.insert(user_id, biometrics);
    }

    pub async fn log_activity(&self, user_id: Uuid, record: ActivityRecord) {
        self.activities
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(record);
    }

    pub async fn log_meal(&self, user_id: Uuid, record: MealRecord) {
        self.meals
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(record);
    }
}

#[async_trait]
impl HealthDataSource for InMemoryHealthDataSource {
    async fn get_biometrics(&self, user_id: Uuid) -> Result<Option<UserBiometrics>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn latest_activity(&self, user_id: Uuid) -> Result<Option<ActivitySample>> {
        let activities = self.activities.read().await;
        let latest = activities
            .get(&user_id)
            .and_then(|records| records.iter().max_by_key(|r| r.logged_at))
            .map(ActivityRecord::to_sample);
        Ok(latest)
    }

    async fn daily_calories(&self, user_id: Uuid, date: NaiveDate) -> Result<DailyCalorieIntake> {
        let meals = self.meals.read().await;
        let intake = meals
            .get(&user_id)
            .map(|records| {
                DailyCalorieIntake::from_meals(
                    records
                        .iter()
                        .filter(|meal| meal.logged_at.date_naive() == date)
                        .map(|meal| meal.calories),
                )
            })
            .unwrap_or_default();
        Ok(intake)
    }
}
