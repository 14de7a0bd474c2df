//! Event repository for published events

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateEventRequest, Event};
use crate::utils::errors::{Result, TrailBuddyError};

#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a newly published event. Attendance starts empty: no
    /// participants and a head count of zero.
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                title, event_date, start_time, duration, organizer,
                departure_location, transport_method, activity_type,
                difficulty, distance, elevation, description,
                has_disclaimer, max_participants, waitlist,
                coming, participants
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, 0, '{}')
            RETURNING id, title, event_date, start_time, duration, organizer,
                      departure_location, transport_method, activity_type,
                      difficulty, distance, elevation, description,
                      has_disclaimer, max_participants, coming, waitlist,
                      participants, created_at, updated_at
            "#,
        )
        .bind(&request.title)
        .bind(request.event_date)
        .bind(request.start_time)
        .bind(&request.duration)
        .bind(&request.organizer)
        .bind(&request.departure_location)
        .bind(&request.transport_method)
        .bind(&request.activity_type)
        .bind(&request.difficulty)
        .bind(&request.distance)
        .bind(&request.elevation)
        .bind(&request.description)
        .bind(request.has_disclaimer)
        .bind(request.max_participants)
        .bind(request.waitlist)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, event_date, start_time, duration, organizer,
                   departure_location, transport_method, activity_type,
                   difficulty, distance, elevation, description,
                   has_disclaimer, max_participants, coming, waitlist,
                   participants, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    pub async fn get_by_id(&self, event_id: Uuid) -> Result<Event> {
        self.find_by_id(event_id)
            .await?
            .ok_or(TrailBuddyError::EventNotFound { event_id })
    }

    /// Events on or after the given date, earliest first. Same-day events
    /// are ordered by start time.
    pub async fn list_upcoming(&self, from_date: NaiveDate) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, event_date, start_time, duration, organizer,
                   departure_location, transport_method, activity_type,
                   difficulty, distance, elevation, description,
                   has_disclaimer, max_participants, coming, waitlist,
                   participants, created_at, updated_at
            FROM events
            WHERE event_date >= $1
            ORDER BY event_date ASC, start_time ASC
            "#,
        )
        .bind(from_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Record one more attendee, up to the participant cap when one is set
    pub async fn add_participant(&self, event_id: Uuid, name: &str) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET coming = coming + 1,
                participants = array_append(participants, $2),
                updated_at = NOW()
            WHERE id = $1
              AND (max_participants IS NULL OR coming < max_participants)
            RETURNING id, title, event_date, start_time, duration, organizer,
                      departure_location, transport_method, activity_type,
                      difficulty, distance, elevation, description,
                      has_disclaimer, max_participants, coming, waitlist,
                      participants, created_at, updated_at
            "#,
        )
        .bind(event_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        event.ok_or(TrailBuddyError::EventNotFound { event_id })
    }

    pub async fn delete(&self, event_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(event_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
