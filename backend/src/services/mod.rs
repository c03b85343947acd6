//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the shared calculation engine.

pub mod metrics;

pub use metrics::HealthMetricsService;
