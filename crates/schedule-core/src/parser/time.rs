//! Time-of-day handling for schedule entries
//!
//! The page lists times as "9:00 AM - 10:15 AM", "12:30 pm", "8 am" or
//! "11-12:30 pm". Times are kept as displayed; minutes after midnight are
//! only computed for durations and sorting.

/// Split a combined time field into `(time_start, time_end)`.
///
/// Accepts hyphen, en dash, em dash or "to" as the separator. A single time
/// yields an empty end. A start that is not a recognizable time yields two
/// empty strings; an unrecognizable end is dropped.
///
/// # Examples
/// ```
/// use schedule_core::parser::split_time_range;
///
/// assert_eq!(
///     split_time_range("9:00 AM - 10:15 AM"),
///     ("9:00 AM".to_string(), "10:15 AM".to_string())
/// );
/// assert_eq!(split_time_range("9:00 AM"), ("9:00 AM".to_string(), String::new()));
/// assert_eq!(split_time_range("TBA"), (String::new(), String::new()));
/// ```
pub fn split_time_range(text: &str) -> (String, String) {
    let text = text.trim();
    if text.is_empty() {
        return (String::new(), String::new());
    }

    let Ok(separator) = regex_lite::Regex::new(r"(?i)\s*[-\x{2013}\x{2014}]\s*|\s+to\s+") else {
        return (String::new(), String::new());
    };
    let mut parts = separator.splitn(text, 2);
    let start = parts.next().unwrap_or_default().trim();
    let end = parts.next().unwrap_or_default().trim();

    if !is_time(start) {
        tracing::warn!(time = text, "unrecognized session time");
        return (String::new(), String::new());
    }
    if !end.is_empty() && !is_time(end) {
        tracing::warn!(time = text, "unrecognized session end time");
        return (start.to_string(), String::new());
    }

    (start.to_string(), end.to_string())
}

/// Check whether `text` looks like a time of day ("9:00 AM", "8 am", "14:30", "noon").
pub fn is_time(text: &str) -> bool {
    to_minutes(text).is_some()
}

/// Convert a time of day to minutes after midnight.
///
/// 12-hour times accept "am"/"pm" in any case, with or without dots.
/// Times without a meridiem are read as 24-hour.
///
/// # Examples
/// ```
/// use schedule_core::parser::to_minutes;
///
/// assert_eq!(to_minutes("12:30 pm"), Some(750));
/// assert_eq!(to_minutes("8 am"), Some(480));
/// assert_eq!(to_minutes("14:05"), Some(845));
/// assert_eq!(to_minutes("lunch"), None);
/// ```
pub fn to_minutes(text: &str) -> Option<u32> {
    let (hours, minutes, meridiem) = parse_clock(text)?;
    apply_meridiem(hours, minutes, meridiem)
}

/// Session length in hours, rounded to three decimals.
///
/// When only the end carries a meridiem ("11-12:30 pm") the start borrows it,
/// unless that would put the start after the end.
///
/// # Returns
/// * `None` if either time is missing or unrecognized, or the end precedes the start
pub fn length_in_hours(start: &str, end: &str) -> Option<f64> {
    let (s_hours, s_minutes, s_meridiem) = parse_clock(start)?;
    let (e_hours, e_minutes, e_meridiem) = parse_clock(end)?;
    let end_minutes = apply_meridiem(e_hours, e_minutes, e_meridiem)?;

    let start_minutes = match (s_meridiem, e_meridiem) {
        (None, Some(m)) => apply_meridiem(s_hours, s_minutes, Some(m))
            .filter(|borrowed| *borrowed <= end_minutes)
            .or_else(|| apply_meridiem(s_hours, s_minutes, None))?,
        _ => apply_meridiem(s_hours, s_minutes, s_meridiem)?,
    };

    if end_minutes < start_minutes {
        return None;
    }

    let hours = f64::from(end_minutes - start_minutes) / 60.0;
    Some((hours * 1000.0).round() / 1000.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Split a time into hours, minutes and optional meridiem without range checks.
fn parse_clock(text: &str) -> Option<(u32, u32, Option<Meridiem>)> {
    let text = text.trim();
    match text.to_lowercase().as_str() {
        "noon" => return Some((12, 0, Some(Meridiem::Pm))),
        "midnight" => return Some((12, 0, Some(Meridiem::Am))),
        _ => {}
    }

    let re = regex_lite::Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*(?:([ap])\.?\s*m\.?)?$").ok()?;
    let caps = re.captures(text)?;

    let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minutes: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = caps.get(3).map(|m| {
        if m.as_str().eq_ignore_ascii_case("p") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });

    Some((hours, minutes, meridiem))
}

fn apply_meridiem(hours: u32, minutes: u32, meridiem: Option<Meridiem>) -> Option<u32> {
    if minutes > 59 {
        return None;
    }
    let hours = match meridiem {
        Some(_) if !(1..=12).contains(&hours) => return None,
        Some(Meridiem::Am) => hours % 12,
        Some(Meridiem::Pm) => hours % 12 + 12,
        None if hours > 23 => return None,
        None => hours,
    };
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_split_time_range_hyphen() {
        assert_eq!(split_time_range("9:00 AM - 10:15 AM"), pair("9:00 AM", "10:15 AM"));
        assert_eq!(split_time_range("9:00 AM-10:15 AM"), pair("9:00 AM", "10:15 AM"));
    }

    #[test]
    fn test_split_time_range_dashes_and_to() {
        assert_eq!(split_time_range("9:00 AM \u{2013} 10:15 AM"), pair("9:00 AM", "10:15 AM"));
        assert_eq!(split_time_range("9:00 AM\u{2014}10:15 AM"), pair("9:00 AM", "10:15 AM"));
        assert_eq!(split_time_range("9:00 am to 10:15 am"), pair("9:00 am", "10:15 am"));
    }

    #[test]
    fn test_split_time_range_single_time() {
        assert_eq!(split_time_range("9:00 AM"), pair("9:00 AM", ""));
        assert_eq!(split_time_range("  8 pm "), pair("8 pm", ""));
    }

    #[test]
    fn test_split_time_range_malformed() {
        assert_eq!(split_time_range(""), pair("", ""));
        assert_eq!(split_time_range("All day"), pair("", ""));
        assert_eq!(split_time_range("9:00 AM - later"), pair("9:00 AM", ""));
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("9:00 AM"), Some(540));
        assert_eq!(to_minutes("12:30 pm"), Some(750));
        assert_eq!(to_minutes("12:15 a.m."), Some(15));
        assert_eq!(to_minutes("1:45 P.M."), Some(825));
        assert_eq!(to_minutes("noon"), Some(720));
        assert_eq!(to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_to_minutes_out_of_range() {
        assert_eq!(to_minutes("13:00 pm"), None);
        assert_eq!(to_minutes("0 am"), None);
        assert_eq!(to_minutes("24:00"), None);
        assert_eq!(to_minutes("9:75 am"), None);
    }

    #[test]
    fn test_length_in_hours() {
        assert_eq!(length_in_hours("9:00 AM", "10:15 AM"), Some(1.25));
        assert_eq!(length_in_hours("11:30 am", "1 pm"), Some(1.5));
        assert_eq!(length_in_hours("9:00 AM", "9:20 AM"), Some(0.333));
    }

    #[test]
    fn test_length_in_hours_borrowed_meridiem() {
        assert_eq!(length_in_hours("9", "10:30 pm"), Some(1.5));
        assert_eq!(length_in_hours("11", "12:30 pm"), Some(1.5));
    }

    #[test]
    fn test_length_in_hours_missing_or_reversed() {
        assert_eq!(length_in_hours("9:00 AM", ""), None);
        assert_eq!(length_in_hours("", ""), None);
        assert_eq!(length_in_hours("3 pm", "1 pm"), None);
    }
}
