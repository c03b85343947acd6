//! Common test utilities for integration tests
//!
//! Builds services over the in-memory data source seeded from fixtures.

use chrono::NaiveDate;
use health_metrics_backend::repositories::{HealthDataSnapshot, InMemoryHealthDataSource};
use health_metrics_backend::services::HealthMetricsService;
use health_metrics_shared::MetricsOptions;
use std::sync::Arc;
use uuid::Uuid;

pub const SNAPSHOT_JSON: &str = include_str!("../fixtures/snapshot.json");

/// Test application wrapper
pub struct TestApp {
    pub service: HealthMetricsService<InMemoryHealthDataSource>,
    pub source: Arc<InMemoryHealthDataSource>,
    pub user_id: Uuid,
}

impl TestApp {
    /// Service seeded with the fixture snapshot and default options
    pub fn new() -> Self {
        Self::with_options(MetricsOptions::default())
    }

    pub fn with_options(options: MetricsOptions) -> Self {
        let snapshot = HealthDataSnapshot::from_json(SNAPSHOT_JSON).expect("fixture parses");
        let user_id = snapshot.user.id;
        let source = Arc::new(InMemoryHealthDataSource::from_snapshot(snapshot));
        let service = HealthMetricsService::new(Arc::clone(&source), options);

        Self {
            service,
            source,
            user_id,
        }
    }
}

/// Day the fixture's current data was logged on
pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 3).expect("valid date")
}
