//! Event draft model
//!
//! The in-progress state of an event being authored through the creation
//! wizard. A draft is mutated step by step, persisted to the draft store on
//! every change, and either discarded or turned into a published event.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activity type chosen in the first wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Hiking,
    Cycling,
    Climbing,
    Skiing,
    Bouldering,
    Social,
}

impl ActivityType {
    /// Whether this activity requires picking a route in the wizard
    pub fn needs_route(self) -> bool {
        matches!(
            self,
            ActivityType::Hiking | ActivityType::Cycling | ActivityType::Climbing
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Hiking => "Hiking",
            ActivityType::Cycling => "Cycling",
            ActivityType::Climbing => "Climbing",
            ActivityType::Skiing => "Skiing",
            ActivityType::Bouldering => "Bouldering",
            ActivityType::Social => "Social",
        }
    }
}

/// How attendees reach the event.
///
/// The transport choice and its detail record form a single tagged union, so
/// a draft can never carry detail fields for a transport mode that is no
/// longer selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TransportDetails {
    Public {
        meeting_point: String,
        ticket_cost: String,
        instructions: String,
    },
    Car {
        pickup_location: String,
        fuel_cost: String,
        car_description: String,
    },
    None,
}

impl TransportDetails {
    /// Empty detail record for a freshly selected public-transport choice
    pub fn public() -> Self {
        TransportDetails::Public {
            meeting_point: String::new(),
            ticket_cost: String::new(),
            instructions: String::new(),
        }
    }

    /// Empty detail record for a freshly selected car choice
    pub fn car() -> Self {
        TransportDetails::Car {
            pickup_location: String::new(),
            fuel_cost: String::new(),
            car_description: String::new(),
        }
    }

    /// Listing-facing transport method label
    pub fn method_label(&self) -> &'static str {
        match self {
            TransportDetails::Public { .. } => "Public transport",
            TransportDetails::Car { .. } => "Carpool",
            TransportDetails::None => "No transport",
        }
    }
}

/// In-progress, unpublished state of an event being authored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub activity_type: Option<ActivityType>,
    pub route_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub event_name: String,
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub has_disclaimer: bool,
    pub transport: Option<TransportDetails>,
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every field is still unset.
    ///
    /// Drives the close-confirmation behavior: a wizard holding an empty
    /// draft closes immediately, a non-empty one asks first.
    pub fn is_empty(&self) -> bool {
        self.activity_type.is_none()
            && self.route_id.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.event_name.is_empty()
            && self.max_participants.is_none()
            && self.description.is_empty()
            && !self.has_disclaimer
            && self.transport.is_none()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        assert!(EventDraft::new().is_empty());
    }

    #[test]
    fn test_single_field_marks_unsaved() {
        let mut draft = EventDraft::new();
        draft.event_name = "Sunday Morning Summit Hike".to_string();
        assert!(draft.has_unsaved_changes());

        let mut draft = EventDraft::new();
        draft.has_disclaimer = true;
        assert!(draft.has_unsaved_changes());
    }

    #[test]
    fn test_needs_route() {
        assert!(ActivityType::Hiking.needs_route());
        assert!(ActivityType::Cycling.needs_route());
        assert!(ActivityType::Climbing.needs_route());
        assert!(!ActivityType::Skiing.needs_route());
        assert!(!ActivityType::Bouldering.needs_route());
        assert!(!ActivityType::Social.needs_route());
    }

    #[test]
    fn test_serde_round_trip_is_stable() {
        let draft = EventDraft {
            activity_type: Some(ActivityType::Hiking),
            route_id: Some(Uuid::new_v4()),
            date: NaiveDate::from_ymd_opt(2026, 6, 23),
            time: NaiveTime::from_hms_opt(6, 45, 0),
            event_name: "Rofanspitze".to_string(),
            max_participants: Some(12),
            description: "Early start, bring poles.".to_string(),
            has_disclaimer: true,
            transport: Some(TransportDetails::Public {
                meeting_point: "Platform 5, Central Station".to_string(),
                ticket_cost: "€15 return ticket".to_string(),
                instructions: "Take the 6:02 regional train.".to_string(),
            }),
        };

        let first = serde_json::to_string(&draft).unwrap();
        let reloaded: EventDraft = serde_json::from_str(&first).unwrap();
        let second = serde_json::to_string(&reloaded).unwrap();

        assert_eq!(draft, reloaded);
        assert_eq!(first, second);
        assert_eq!(draft.date, reloaded.date);
    }

    #[test]
    fn test_transport_tagged_union_serde() {
        let json = serde_json::to_string(&TransportDetails::None).unwrap();
        assert_eq!(json, r#"{"mode":"none"}"#);

        let car: TransportDetails = serde_json::from_str(
            r#"{"mode":"car","pickup_location":"Main Street 42","fuel_cost":"€10 per person","car_description":"Blue VW Golf"}"#,
        )
        .unwrap();
        assert_eq!(car.method_label(), "Carpool");
    }
}
