//! Normalization of extracted field groups into `Session` records
//!
//! Text cleanup, time splitting, speaker splitting and link resolution.

use reqwest::Url;

use crate::types::{RawSession, Session};

use super::time::{length_in_hours, split_time_range};

/// Normalize one raw field group into a session.
///
/// # Arguments
/// * `raw` - Field group produced by the extractor
/// * `base` - Page URL used to resolve relative session links
///
/// # Returns
/// * `Some(Session)` for a usable record
/// * `None` if the title or day is empty after cleanup
pub fn normalize_session(raw: RawSession, base: Option<&Url>) -> Option<Session> {
    let title = raw.title.as_deref().map(clean_text).unwrap_or_default();
    if title.is_empty() {
        tracing::warn!(day = %raw.day, "skipping session without a title");
        return None;
    }

    let day = clean_text(&raw.day);
    if day.is_empty() {
        tracing::warn!(title = %title, "skipping session without a day");
        return None;
    }

    let (time_start, time_end) = raw
        .time
        .as_deref()
        .map(|t| split_time_range(&clean_text(t)))
        .unwrap_or_default();
    let length = length_in_hours(&time_start, &time_end);

    let (event_id, event_url) = match raw.href.as_deref() {
        Some(href) => resolve_link(href, base),
        None => (None, None),
    };

    Some(Session {
        day,
        time_start,
        time_end,
        title,
        room: clean_opt(raw.room.as_deref()),
        speakers: raw.speakers.as_deref().map(parse_speakers).unwrap_or_default(),
        description: clean_opt(raw.description.as_deref()),
        session_type: clean_opt(raw.session_type.as_deref()),
        length_in_hours: length,
        event_id,
        event_url,
    })
}

/// Normalize every field group, counting the ones that were dropped.
pub fn normalize_all(raws: Vec<RawSession>, base: Option<&Url>) -> (Vec<Session>, usize) {
    let total = raws.len();
    let sessions: Vec<Session> = raws
        .into_iter()
        .filter_map(|raw| normalize_session(raw, base))
        .collect();
    let skipped = total - sessions.len();
    (sessions, skipped)
}

/// Trim, repair and collapse whitespace runs into single spaces.
///
/// # Examples
/// ```
/// use schedule_core::parser::clean_text;
///
/// assert_eq!(clean_text("  Intro\n\tto   SQL "), "Intro to SQL");
/// assert_eq!(clean_text("Caf\u{c3}\u{a9}"), "Caf\u{e9}");
/// ```
pub fn clean_text(text: &str) -> String {
    repair_mojibake(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn clean_opt(text: Option<&str>) -> Option<String> {
    text.map(clean_text).filter(|t| !t.is_empty())
}

/// Fix UTF-8 sequences that were decoded as Latin-1 ("Ã©" back to "é").
///
/// Runs that do not form valid UTF-8 once re-encoded are left untouched.
pub fn repair_mojibake(text: &str) -> String {
    let Ok(re) = regex_lite::Regex::new(r"[\x{c2}-\x{f4}][\x{80}-\x{bf}]+") else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex_lite::Captures| {
        let run = &caps[0];
        let bytes: Vec<u8> = run.chars().map(|c| c as u32 as u8).collect();
        String::from_utf8(bytes).unwrap_or_else(|_| run.to_string())
    })
    .into_owned()
}

/// Split a speakers field into individual names.
///
/// # Examples
/// ```
/// use schedule_core::parser::parse_speakers;
///
/// assert_eq!(
///     parse_speakers("Speakers: Jane Doe, John Roe and Ann Poe"),
///     vec!["Jane Doe", "John Roe", "Ann Poe"]
/// );
/// ```
pub fn parse_speakers(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    let Ok(label) = regex_lite::Regex::new(r"(?i)^speakers?\s*:\s*") else {
        return vec![cleaned];
    };
    let names = label.replace(&cleaned, "");

    let Ok(separator) = regex_lite::Regex::new(r"(?i)\s*[;,&]\s*|\s+and\s+") else {
        return vec![names.into_owned()];
    };
    separator
        .split(&names)
        .map(clean_text)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Derive `(event_id, event_url)` from a session link.
///
/// The id is the last two path segments, e.g. `sessions/4242` for
/// `/nicar-2019/sessions/4242/`.
fn resolve_link(href: &str, base: Option<&Url>) -> (Option<String>, Option<String>) {
    let href = href.trim();
    if href.is_empty() {
        return (None, None);
    }

    let resolved = Url::options().base_url(base).parse(href).ok();
    let path = match &resolved {
        Some(url) => url.path().to_string(),
        None => href.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let event_id = match segments.len() {
        0 => None,
        1 => Some(segments[0].to_string()),
        n => Some(segments[n - 2..].join("/")),
    };

    (event_id, resolved.map(|url| url.to_string()))
}
