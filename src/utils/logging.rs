//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TrailBuddy application.

use crate::config::LoggingConfig;
use crate::utils::errors::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging based on configuration.
///
/// Returns the appender worker guard; the caller must hold it for the
/// lifetime of the program or buffered file output is lost on drop.
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "trailbuddy.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log draft lifecycle actions with structured data
pub fn log_draft_action(user_id: i64, action: &str, step: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        step = step,
        "Draft action performed"
    );
}

/// Log event publication and listing actions
pub fn log_event_action(event_id: &str, action: &str, user_id: i64, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        user_id = user_id,
        details = details,
        "Event action performed"
    );
}

/// Log a failed submission that leaves the draft intact for retry
pub fn log_submission_failure(user_id: i64, error: &str) {
    warn!(
        user_id = user_id,
        error = error,
        "Event submission failed, draft preserved"
    );
}
