//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub events: EventDefaultsConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration (draft storage and listing cache)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
    pub ttl_seconds: u64,
}

/// Defaults substituted for unset optional draft fields at publication
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventDefaultsConfig {
    pub activity: String,
    pub duration: String,
    pub distance: String,
    pub elevation: String,
    pub departure_location: String,
    pub organizer: String,
    /// How long a cached upcoming-events listing stays valid
    pub listing_cache_ttl_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("TRAILBUDDY"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TrailBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "postgresql://localhost/trailbuddy".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
                prefix: "trailbuddy:".to_string(),
                ttl_seconds: 86400,
            },
            events: EventDefaultsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/trailbuddy".to_string(),
            },
        }
    }
}

impl Default for EventDefaultsConfig {
    fn default() -> Self {
        Self {
            activity: "Hiking".to_string(),
            duration: "4 hours".to_string(),
            distance: "10km".to_string(),
            elevation: "500m".to_string(),
            departure_location: "Meet at trailhead".to_string(),
            organizer: "You".to_string(),
            listing_cache_ttl_seconds: 300,
        }
    }
}
