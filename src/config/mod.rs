//! Configuration module
//!
//! Application settings loading and validation

pub mod settings;
pub mod validation;

pub use settings::{DatabaseConfig, EventDefaultsConfig, LoggingConfig, RedisConfig, Settings};
