//! Session extraction from the schedule page
//!
//! Walks day containers, then time slots (when configured), then session
//! entries, collecting each entry's raw field text in document order.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

use crate::config::Selectors;
use crate::error::{Result, ScheduleError};
use crate::types::RawSession;

/// Extract raw session field groups from a parsed schedule page.
///
/// Missing containers only empty their own branch: a day without slots or
/// a slot without sessions contributes nothing.
///
/// # Arguments
/// * `document` - Parsed schedule page
/// * `selectors` - Compiled page structure
/// * `day_labels` - Fallback day labels, by day position
///
/// # Returns
/// * `Ok(Vec<RawSession>)` with at least one entry, in document order
/// * `Err(ScheduleError::Extraction)` if no session is found anywhere
pub fn extract_sessions(
    document: &Html,
    selectors: &Selectors,
    day_labels: &[String],
) -> Result<Vec<RawSession>> {
    let days = outermost(document.select(&selectors.day));
    if days.is_empty() {
        return Err(ScheduleError::Extraction(
            "no day containers matched the page".to_string(),
        ));
    }

    let mut sessions = Vec::new();

    for (index, day) in days.iter().enumerate() {
        let Some(label) = day_label(day, index, selectors, day_labels) else {
            tracing::warn!(day = index, "no label for day container, skipping its sessions");
            continue;
        };

        let before = sessions.len();
        match &selectors.slot {
            Some(slot_selector) => {
                for slot in outermost(day.select(slot_selector)) {
                    let slot_time = selectors
                        .slot_time
                        .as_ref()
                        .and_then(|sel| text_of(&slot, sel));
                    collect_sessions(&slot, &label, slot_time.as_deref(), selectors, &mut sessions);
                }
            }
            None => collect_sessions(day, &label, None, selectors, &mut sessions),
        }

        tracing::debug!(day = %label, sessions = sessions.len() - before, "extracted day");
    }

    if sessions.is_empty() {
        return Err(ScheduleError::Extraction(format!(
            "{} day container(s) matched but none held a session",
            days.len()
        )));
    }

    Ok(sessions)
}

/// Collect every session entry below `container`.
fn collect_sessions(
    container: &ElementRef,
    day: &str,
    slot_time: Option<&str>,
    selectors: &Selectors,
    out: &mut Vec<RawSession>,
) {
    for entry in outermost(container.select(&selectors.session)) {
        let href = entry
            .select(&selectors.link)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(|href| href.to_string());

        out.push(RawSession {
            day: day.to_string(),
            time: text_of(&entry, &selectors.time).or_else(|| slot_time.map(|t| t.to_string())),
            title: text_of(&entry, &selectors.title),
            room: text_of(&entry, &selectors.room),
            speakers: text_of(&entry, &selectors.speakers),
            description: text_of(&entry, &selectors.description),
            session_type: text_of(&entry, &selectors.session_type),
            href,
        });
    }
}

/// Resolve the label of a day container.
///
/// Tries the label selector, then the label attribute, then the positional
/// fallback list.
fn day_label(
    day: &ElementRef,
    index: usize,
    selectors: &Selectors,
    day_labels: &[String],
) -> Option<String> {
    selectors
        .day_label
        .as_ref()
        .and_then(|sel| text_of(day, sel))
        .or_else(|| {
            selectors
                .day_label_attr
                .as_deref()
                .and_then(|attr| day.value().attr(attr))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        })
        .or_else(|| day_labels.get(index).cloned())
}

/// Text of every match of `selector` below `element`, trimmed, empties
/// dropped, joined with single spaces.
fn text_of(element: &ElementRef, selector: &Selector) -> Option<String> {
    let parts: Vec<String> = element
        .select(selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Keep only matches that are not nested inside another match.
fn outermost<'a>(matches: impl Iterator<Item = ElementRef<'a>>) -> Vec<ElementRef<'a>> {
    let matches: Vec<ElementRef<'a>> = matches.collect();
    let ids: HashSet<_> = matches.iter().map(|el| el.id()).collect();

    matches
        .into_iter()
        .filter(|el| !el.ancestors().any(|ancestor| ids.contains(&ancestor.id())))
        .collect()
}
