//! Error handling for TrailBuddy
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for TrailBuddy application
#[derive(Error, Debug)]
pub enum TrailBuddyError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: uuid::Uuid },

    #[error("Route not found: {route_id}")]
    RouteNotFound { route_id: uuid::Uuid },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for TrailBuddy operations
pub type Result<T> = std::result::Result<T, TrailBuddyError>;

impl TrailBuddyError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TrailBuddyError::Database(_) => false,
            TrailBuddyError::Migration(_) => false,
            TrailBuddyError::Config(_) => false,
            TrailBuddyError::EventNotFound { .. } => false,
            TrailBuddyError::RouteNotFound { .. } => false,
            TrailBuddyError::InvalidStateTransition { .. } => false,
            TrailBuddyError::SubmissionInProgress => true,
            TrailBuddyError::Redis(_) => true,
            TrailBuddyError::Serialization(_) => false,
            TrailBuddyError::Io(_) => true,
            TrailBuddyError::InvalidInput(_) => false,
            TrailBuddyError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrailBuddyError::Database(_) => ErrorSeverity::Critical,
            TrailBuddyError::Migration(_) => ErrorSeverity::Critical,
            TrailBuddyError::Config(_) => ErrorSeverity::Critical,
            TrailBuddyError::SubmissionInProgress => ErrorSeverity::Warning,
            TrailBuddyError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classification() {
        assert_eq!(
            TrailBuddyError::Config("missing".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            TrailBuddyError::SubmissionInProgress.severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            TrailBuddyError::InvalidInput("bad".to_string()).severity(),
            ErrorSeverity::Info
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(TrailBuddyError::SubmissionInProgress.is_recoverable());
        assert!(!TrailBuddyError::InvalidStateTransition {
            from: "open".to_string(),
            to: "closed".to_string(),
        }
        .is_recoverable());
    }
}
