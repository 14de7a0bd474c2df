//! TrailBuddy
//!
//! Core library for a hiking and outdoor-events platform. It provides the
//! multi-step event-creation wizard (draft state machine, durable draft
//! persistence, publication), the route filter/sort engine, and the grouped
//! upcoming-events listing.

pub mod config;
pub mod database;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, TrailBuddyError};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use models::{Event, EventDraft, Route};
pub use services::{RouteFilters, ServiceFactory, SortOption};
pub use state::{DraftStorage, WizardSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
