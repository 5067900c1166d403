//! Configuration management for StatQuery services
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Detection configuration
    pub detection: DetectionConfig,

    /// Observability configuration
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectionConfig {
    /// Place dcid to fall back to when a query names no place
    #[serde(default = "default_place_dcid")]
    pub default_place_dcid: String,

    /// Display name of the fallback place
    #[serde(default = "default_place_name")]
    pub default_place_name: String,

    /// Entity type of the fallback place
    #[serde(default = "default_place_type")]
    pub default_place_type: String,

    /// Minimum embedding score for an SV candidate to be usable
    #[serde(default = "default_sv_score_threshold")]
    pub sv_score_threshold: f64,

    /// Maximum SV candidates surfaced to response construction
    #[serde(default = "default_max_sv_candidates")]
    pub max_sv_candidates: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Service name for tracing
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

// Default value functions
fn default_place_dcid() -> String { "country/USA".to_string() }
fn default_place_name() -> String { "United States".to_string() }
fn default_place_type() -> String { "Country".to_string() }
fn default_sv_score_threshold() -> f64 { 0.3 }
fn default_max_sv_candidates() -> usize { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { true }
fn default_service_name() -> String { "statquery".to_string() }

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with defaults
            .set_default("detection.default_place_dcid", "country/USA")?
            .set_default("detection.sv_score_threshold", 0.3)?

            // Load base config file
            .add_source(File::with_name("config/default").required(false))

            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))

            // Load local overrides
            .add_source(File::with_name("config/local").required(false))

            // Load from environment variables with APP__ prefix
            // e.g., APP__DETECTION__SV_SCORE_THRESHOLD=0.25
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )

            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig {
                default_place_dcid: default_place_dcid(),
                default_place_name: default_place_name(),
                default_place_type: default_place_type(),
                sv_score_threshold: default_sv_score_threshold(),
                max_sv_candidates: default_max_sv_candidates(),
            },
            observability: ObservabilityConfig {
                log_level: default_log_level(),
                json_logging: default_json_logging(),
                service_name: default_service_name(),
            },
        }
    }
}
