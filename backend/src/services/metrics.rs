//! Health metrics service - builds the metrics report from stored user data
//!
//! Fetches the user's biometrics, most recent activity and the day's meal
//! calories from a [`HealthDataSource`], then runs the shared engine.

use crate::error::{ServiceError, ServiceResult};
use crate::repositories::HealthDataSource;
use chrono::{NaiveDate, Utc};
use health_metrics_shared::{compute_health_metrics, HealthMetricsReport, MetricsOptions};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Health metrics service
pub struct HealthMetricsService<S: ?Sized> {
    source: Arc<S>,
    options: MetricsOptions,
}

impl<S: ?Sized> Clone for HealthMetricsService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            options: self.options.clone(),
        }
    }
}

impl<S> HealthMetricsService<S>
where
    S: HealthDataSource + ?Sized,
{
    pub fn new(source: Arc<S>, options: MetricsOptions) -> Self {
        Self { source, options }
    }

    pub fn options(&self) -> &MetricsOptions {
        &self.options
    }

    /// Compute the metrics report for a user on a given (UTC) date
    ///
    /// The three fetches run concurrently. A user without a profile yields
    /// `UserNotFound`; incomplete or invalid biometrics fail the whole call.
    #[instrument(skip(self), fields(lbm_height_basis = %self.options.lbm_height_basis))]
    pub async fn get_health_metrics(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> ServiceResult<HealthMetricsReport> {
        let (biometrics, activity, intake) = tokio::try_join!(
            self.source.get_biometrics(user_id),
            self.source.latest_activity(user_id),
            self.source.daily_calories(user_id, date),
        )?;

        let biometrics = biometrics.ok_or(ServiceError::UserNotFound(user_id))?;

        if activity.is_none() {
            debug!(
                default_intensity = %self.options.default_intensity,
                "No activity logged, using idle sample"
            );
        }

        let report = compute_health_metrics(&biometrics, activity.as_ref(), intake, &self.options)
            .map_err(|err| {
                warn!(error = %err, "Health metrics could not be computed");
                ServiceError::from(err)
            })?;

        info!(
            bmi = report.bmi,
            bmi_category = %report.bmi_category,
            activity_level = %report.activity_level,
            tee = report.tee,
            "Computed health metrics"
        );

        Ok(report)
    }

    /// Compute the metrics report for today (UTC)
    pub async fn get_health_metrics_for_today(
        &self,
        user_id: Uuid,
    ) -> ServiceResult<HealthMetricsReport> {
        let today = Utc::now().date_naive();
        self.get_health_metrics(user_id, today).await
    }
}
