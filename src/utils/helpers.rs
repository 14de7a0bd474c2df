//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format an event date as a listing bucket label.
///
/// Events on `today` render as "Today, {weekday}", the day after as
/// "Tomorrow, {weekday}", everything else as "{Mon} {day}, {weekday}".
pub fn format_event_date(date: NaiveDate, today: NaiveDate) -> String {
    let weekday = date.format("%A");
    if date == today {
        format!("Today, {}", weekday)
    } else if date == today.succ_opt().unwrap_or(today) {
        format!("Tomorrow, {}", weekday)
    } else {
        format!("{} {}, {}", date.format("%b"), date.day(), weekday)
    }
}

/// Format an event start time for display ("6:45", "14:30")
pub fn format_event_time(time: NaiveTime) -> String {
    time.format("%-H:%M").to_string()
}

/// Parse a "HH:MM" time string as entered in the date/time step
pub fn parse_event_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()
}

/// Truncate text to a maximum character count with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
