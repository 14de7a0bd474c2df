//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod draft;
pub mod event;
pub mod route;

// Re-export commonly used models
pub use draft::{ActivityType, EventDraft, TransportDetails};
pub use event::{CreateEventRequest, Event, EventGroup};
pub use route::{Difficulty, Facility, Highlight, Route, RouteFeature, TechnicalGrade};
