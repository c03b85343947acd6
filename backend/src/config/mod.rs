//! Configuration management for the health metrics service
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HM__)

use anyhow::Result;
use health_metrics_shared::MetricsOptions;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub metrics: MetricsOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Force JSON (true) or pretty (false) output; unset follows RUST_ENV
    #[serde(default)]
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn use_json(&self) -> bool {
        self.json.unwrap_or_else(AppConfig::is_production)
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HM__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HM__ prefix)
            // e.g., HM__METRICS__LBM_HEIGHT_BASIS=centimeters
            .add_source(config::Environment::with_prefix("HM").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_metrics_shared::LbmHeightBasis;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.metrics.lbm_height_basis, LbmHeightBasis::AsProvided);
        assert_eq!(config.metrics.default_intensity, "moderate");
        assert!(config.logging.json.is_none());
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }

    #[test]
    fn test_logging_override_wins() {
        let logging = LoggingConfig { json: Some(true) };
        assert!(logging.use_json());
    }

    #[test]
    fn test_config_from_toml_source() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).unwrap())
            .add_source(config::File::from_str(
                "[metrics]\nlbm_height_basis = \"centimeters\"\ndefault_intensity = \"walking\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.metrics.lbm_height_basis, LbmHeightBasis::Centimeters);
        assert_eq!(config.metrics.default_intensity, "walking");
    }
}
