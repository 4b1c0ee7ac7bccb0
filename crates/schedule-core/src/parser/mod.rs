//! HTML parsing for the schedule page
//!
//! This module turns the fetched page into session records:
//! - `extract`: walk day → time slot → session containers
//! - `normalize`: clean text and assemble `Session` records
//! - `time`: time range splitting and durations

pub mod extract;
pub mod normalize;
pub mod time;

use scraper::Html;

use crate::error::{Result, ScheduleError};

// Re-export main parsing functions
pub use extract::extract_sessions;
pub use normalize::{clean_text, normalize_all, normalize_session, parse_speakers, repair_mojibake};
pub use time::{is_time, length_in_hours, split_time_range, to_minutes};

/// Parse raw HTML into a document tree.
///
/// Parsing is lenient: malformed markup is repaired the way a browser
/// would. Only a body with no content at all is rejected.
///
/// # Errors
/// `ScheduleError::Parse` if `html` is empty or whitespace-only
pub fn parse_document(html: &str) -> Result<Html> {
    if html.trim().is_empty() {
        return Err(ScheduleError::Parse("response body is empty".to_string()));
    }

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::debug!(errors = document.errors.len(), "HTML parsed with recoverable errors");
    }
    Ok(document)
}
