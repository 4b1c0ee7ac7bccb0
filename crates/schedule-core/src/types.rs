//! Data types for the schedule scraper
//!
//! This module contains the records passed between pipeline stages.
//! `Session` field order is the canonical key order shared by the JSON and
//! CSV outputs; do not reorder fields without updating [`CSV_COLUMNS`].

use serde::{Deserialize, Serialize};

/// Canonical key order, used as the CSV header
pub const CSV_COLUMNS: [&str; 11] = [
    "day",
    "time_start",
    "time_end",
    "title",
    "room",
    "speakers",
    "description",
    "session_type",
    "length_in_hours",
    "event_id",
    "event_url",
];

/// One schedule entry (talk, panel, hands-on class...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Day label as shown on the page (never empty)
    pub day: String,
    /// Start time, e.g. "9:00 AM"; empty when the page gives no usable time
    pub time_start: String,
    /// End time; empty when only a start time is listed
    pub time_end: String,
    /// Session title (never empty)
    pub title: String,
    /// Room or location label
    pub room: Option<String>,
    /// Speaker names in page order
    pub speakers: Vec<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Session format, e.g. "Hands-on" or "Panel"
    pub session_type: Option<String>,
    /// Duration in hours, rounded to three decimals
    pub length_in_hours: Option<f64>,
    /// Identifier derived from the session link
    pub event_id: Option<String>,
    /// Absolute link to the session page
    pub event_url: Option<String>,
}

/// Unnormalized strings extracted for one session
///
/// Every field is whatever text the page held, whitespace and all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSession {
    pub day: String,
    pub time: Option<String>,
    pub title: Option<String>,
    pub room: Option<String>,
    pub speakers: Option<String>,
    pub description: Option<String>,
    pub session_type: Option<String>,
    pub href: Option<String>,
}

/// Result of one scrape
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    /// Normalized sessions, in output order
    pub sessions: Vec<Session>,
    /// Number of session blocks found on the page
    pub raw_count: usize,
    /// Number of blocks dropped because they had no title
    pub skipped: usize,
}

impl Schedule {
    /// Number of sessions that will be written.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session survived normalization.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
