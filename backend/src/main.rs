//! Health Metrics CLI
//!
//! Loads one user's data snapshot, computes the day's health metrics report
//! through the same service a hosted deployment would use, and prints it as
//! JSON on stdout. Logs go to stderr.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use health_metrics_backend::{
    cli::Cli, config, repositories::InMemoryHealthDataSource, services::HealthMetricsService,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let mut config = config::AppConfig::load()?;
    if let Some(basis) = cli.lbm_height_basis {
        config.metrics.lbm_height_basis = basis;
    }

    init_tracing(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        lbm_height_basis = %config.metrics.lbm_height_basis,
        "Starting health metrics"
    );

    let snapshot = cli.read_snapshot()?;
    let user_id = snapshot.user.id;
    let date = cli.date.unwrap_or_else(|| Utc::now().date_naive());

    let source = Arc::new(InMemoryHealthDataSource::from_snapshot(snapshot));
    let service = HealthMetricsService::new(source, config.metrics.clone());

    let report = match service.get_health_metrics(user_id, date).await {
        Ok(report) => report,
        Err(err) => {
            let detail = err.detail();
            error!(code = detail.code, field = ?detail.field, "{}", detail.message);
            eprintln!("{}", serde_json::to_string_pretty(&detail)?);
            std::process::exit(if err.is_client_error() { 2 } else { 1 });
        }
    };

    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", output);

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &config::AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "health_metrics_backend=info".into()
        } else {
            "health_metrics_backend=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.logging.use_json() {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
