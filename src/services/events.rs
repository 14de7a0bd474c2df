//! Event service
//!
//! Publication of wizard drafts and the upcoming-events listing. Publication
//! denormalizes the draft into a flat insert record, substituting configured
//! defaults for unset optional fields; the listing is read through a
//! Redis-backed cache that publication invalidates.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::config::EventDefaultsConfig;
use crate::database::{EventRepository, RouteRepository};
use crate::models::{CreateEventRequest, Event, EventDraft, EventGroup, Route, TransportDetails};
use crate::state::{DraftStorage, KeyValueStore, WizardSession};
use crate::utils::errors::{Result, TrailBuddyError};
use crate::utils::helpers::format_event_date;
use crate::utils::logging::{log_event_action, log_submission_failure};

const DEFAULT_START_TIME: (u32, u32) = (9, 0);

#[derive(Clone)]
pub struct EventService {
    events: EventRepository,
    routes: RouteRepository,
    drafts: DraftStorage,
    cache: Arc<dyn KeyValueStore>,
    defaults: EventDefaultsConfig,
    cache_prefix: String,
}

impl EventService {
    pub fn new(
        events: EventRepository,
        routes: RouteRepository,
        drafts: DraftStorage,
        cache: Arc<dyn KeyValueStore>,
        defaults: EventDefaultsConfig,
        cache_prefix: &str,
    ) -> Self {
        Self {
            events,
            routes,
            drafts,
            cache,
            defaults,
            cache_prefix: cache_prefix.to_string(),
        }
    }

    /// Publish the session's draft as an event.
    ///
    /// At most one submission per session is in flight. On success the
    /// stored draft is cleared, the listing cache invalidated, and the
    /// wizard closed; on failure the draft stays intact for retry and the
    /// error is returned to the caller.
    pub async fn publish(&self, session: &mut WizardSession) -> Result<Event> {
        session.begin_submission()?;

        let result = self.publish_inner(session).await;
        match result {
            Ok(event) => {
                if let Err(e) = self.drafts.clear_draft(session.user_id).await {
                    tracing::warn!(user_id = session.user_id, error = %e, "Draft cleanup failed after publish");
                }
                self.invalidate_listing_cache().await;
                session.finish_submission(true);
                log_event_action(
                    &event.id.to_string(),
                    "published",
                    session.user_id,
                    Some(&event.title),
                );
                Ok(event)
            }
            Err(e) => {
                session.finish_submission(false);
                log_submission_failure(session.user_id, &e.to_string());
                Err(e)
            }
        }
    }

    async fn publish_inner(&self, session: &WizardSession) -> Result<Event> {
        let route = match session.draft.route_id {
            Some(route_id) => Some(self.routes.get_by_id(route_id).await?),
            None => None,
        };
        let request = build_create_request(&session.draft, route.as_ref(), &self.defaults)?;
        self.events.create(request).await
    }

    /// Upcoming events grouped into display buckets by date label.
    ///
    /// The flat listing is served from the cache when present; a cache that
    /// cannot be read or written never fails the listing itself.
    pub async fn upcoming_groups(&self, today: NaiveDate) -> Result<Vec<EventGroup>> {
        let events = match self.cached_listing().await {
            Some(events) => events,
            None => {
                let events = self.events.list_upcoming(today).await?;
                self.store_listing(&events).await;
                events
            }
        };

        Ok(group_events(events, today))
    }

    async fn cached_listing(&self) -> Option<Vec<Event>> {
        let key = self.listing_key();
        match self.cache.get(&key).await {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(events) => Some(events),
                Err(e) => {
                    tracing::warn!(error = %e, "Cached listing is malformed, refetching");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Listing cache read failed, falling back to database");
                None
            }
        }
    }

    async fn store_listing(&self, events: &[Event]) {
        let key = self.listing_key();
        match serde_json::to_string(events) {
            Ok(payload) => {
                if let Err(e) = self
                    .cache
                    .set(&key, &payload, self.defaults.listing_cache_ttl_seconds)
                    .await
                {
                    tracing::warn!(error = %e, "Listing cache write failed");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Listing serialization failed"),
        }
    }

    async fn invalidate_listing_cache(&self) {
        if let Err(e) = self.cache.remove(&self.listing_key()).await {
            tracing::warn!(error = %e, "Listing cache invalidation failed");
        }
    }

    fn listing_key(&self) -> String {
        format!("{}events:upcoming", self.cache_prefix)
    }
}

impl std::fmt::Debug for EventService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventService")
            .field("cache_prefix", &self.cache_prefix)
            .finish_non_exhaustive()
    }
}

/// Denormalize a draft into a flat insert record, substituting configured
/// defaults for unset optional fields. Route-derived fields (distance,
/// elevation, technical grade) win over the defaults when a route is
/// selected. The waitlist is authored after publication, never at it.
pub fn build_create_request(
    draft: &EventDraft,
    route: Option<&Route>,
    defaults: &EventDefaultsConfig,
) -> Result<CreateEventRequest> {
    let event_date = draft.date.ok_or_else(|| {
        TrailBuddyError::InvalidInput("An event needs a date before publishing".to_string())
    })?;

    let activity_type = draft
        .activity_type
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| defaults.activity.clone());

    let title = if draft.event_name.is_empty() {
        format!("{} Event", activity_type)
    } else {
        draft.event_name.clone()
    };

    let start_time = draft.time.unwrap_or_else(|| {
        NaiveTime::from_hms_opt(DEFAULT_START_TIME.0, DEFAULT_START_TIME.1, 0).unwrap_or_default()
    });

    let transport_method = draft
        .transport
        .as_ref()
        .unwrap_or(&TransportDetails::None)
        .method_label()
        .to_string();

    let departure_location = match &draft.transport {
        Some(TransportDetails::Public { meeting_point, .. }) if !meeting_point.is_empty() => {
            meeting_point.clone()
        }
        Some(TransportDetails::Car {
            pickup_location, ..
        }) if !pickup_location.is_empty() => pickup_location.clone(),
        _ => defaults.departure_location.clone(),
    };

    let distance = route
        .map(|r| format!("{}km", r.distance_km))
        .unwrap_or_else(|| defaults.distance.clone());
    let elevation = route
        .map(|r| format!("{}m", r.elevation_gain_m))
        .unwrap_or_else(|| defaults.elevation.clone());
    let difficulty = route
        .map(|r| format!("{:?}", r.technical_grade))
        .unwrap_or_else(|| "T1".to_string());

    Ok(CreateEventRequest {
        title,
        event_date,
        start_time,
        duration: defaults.duration.clone(),
        organizer: defaults.organizer.clone(),
        departure_location,
        transport_method,
        activity_type,
        difficulty,
        distance,
        elevation,
        description: if draft.description.is_empty() {
            None
        } else {
            Some(draft.description.clone())
        },
        has_disclaimer: draft.has_disclaimer,
        max_participants: draft.max_participants,
        waitlist: None,
    })
}

/// Group a date-then-time ordered listing into display buckets
pub fn group_events(events: Vec<Event>, today: NaiveDate) -> Vec<EventGroup> {
    let mut groups: Vec<EventGroup> = Vec::new();
    for event in events {
        let label = format_event_date(event.event_date, today);
        match groups.last_mut() {
            Some(group) if group.date_label == label => group.events.push(event),
            _ => groups.push(EventGroup {
                date_label: label,
                events: vec![event],
            }),
        }
    }
    groups
}
