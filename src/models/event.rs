//! Event model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published event as stored in the backend
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration: String,
    pub organizer: String,
    pub departure_location: String,
    pub transport_method: String,
    pub activity_type: String,
    pub difficulty: String,
    pub distance: String,
    pub elevation: String,
    pub description: Option<String>,
    pub has_disclaimer: bool,
    pub max_participants: Option<i32>,
    pub coming: i32,
    pub waitlist: Option<i32>,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized insert payload assembled from an [`EventDraft`] at publication
///
/// [`EventDraft`]: crate::models::draft::EventDraft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration: String,
    pub organizer: String,
    pub departure_location: String,
    pub transport_method: String,
    pub activity_type: String,
    pub difficulty: String,
    pub distance: String,
    pub elevation: String,
    pub description: Option<String>,
    pub has_disclaimer: bool,
    pub max_participants: Option<i32>,
    pub waitlist: Option<i32>,
}

impl Event {
    /// Spots still open, derived from the cap and the current head count.
    ///
    /// `None` when the event has no participant cap. The waitlist size, by
    /// contrast, is authored by the organizer and stored as-is.
    pub fn available_spots(&self) -> Option<i32> {
        self.max_participants
            .map(|cap| (cap - self.coming).max(0))
    }
}

/// Events for one listing date bucket ("Today, Monday", "Jun 23, Sunday")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventGroup {
    pub date_label: String,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(max_participants: Option<i32>, coming: i32) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Rofanspitze".to_string(),
            event_date: NaiveDate::from_ymd_opt(2026, 6, 23).unwrap(),
            start_time: NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
            duration: "12 hours".to_string(),
            organizer: "Helena".to_string(),
            departure_location: "Munich Hbf".to_string(),
            transport_method: "Carpool".to_string(),
            activity_type: "Hiking".to_string(),
            difficulty: "T3".to_string(),
            distance: "18km".to_string(),
            elevation: "1982m".to_string(),
            description: None,
            has_disclaimer: false,
            max_participants,
            coming,
            waitlist: None,
            participants: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_available_spots_derived_from_cap() {
        assert_eq!(sample_event(Some(16), 12).available_spots(), Some(4));
    }

    #[test]
    fn test_available_spots_floor_at_zero() {
        assert_eq!(sample_event(Some(10), 14).available_spots(), Some(0));
    }

    #[test]
    fn test_available_spots_without_cap() {
        assert_eq!(sample_event(None, 12).available_spots(), None);
    }
}
