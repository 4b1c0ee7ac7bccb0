//! JSON rendering of session lists

use std::io;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, ScheduleError};
use crate::types::Session;

const INDENT: &[u8] = b"    ";

/// Render sessions as a pretty-printed JSON array with a trailing newline.
///
/// Keys follow the canonical order of [`Session`]'s fields.
pub fn to_json(sessions: &[Session]) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sessions.serialize(&mut serializer)?;
    buf.push(b'\n');

    String::from_utf8(buf)
        .map_err(|e| ScheduleError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(title: &str) -> Session {
        Session {
            day: "2019-03-07".to_string(),
            time_start: "9:00 AM".to_string(),
            time_end: String::new(),
            title: title.to_string(),
            room: None,
            speakers: vec!["Jane Doe".to_string(), "John Roe".to_string()],
            description: Some("Line one\nline two".to_string()),
            session_type: None,
            length_in_hours: None,
            event_id: None,
            event_url: None,
        }
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[]).unwrap(), "[]\n");
    }

    #[test]
    fn test_to_json_pretty_four_space_indent() {
        let json = to_json(&[session("Keynote")]).unwrap();
        assert!(json.starts_with("[\n    {\n        \"day\": \"2019-03-07\","));
        assert!(json.ends_with("}\n]\n"));
        assert!(json.contains("\"time_end\": \"\""));
        assert!(json.contains("\"room\": null"));
    }

    #[test]
    fn test_to_json_reparses_to_same_sessions() {
        let sessions = vec![session("Keynote"), session("Data, \"cleaned\"")];
        let json = to_json(&sessions).unwrap();
        let parsed: Vec<Session> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sessions);
    }

    #[test]
    fn test_to_json_keeps_non_ascii_text() {
        let json = to_json(&[session("Café data – São Paulo")]).unwrap();
        assert!(json.contains("\"title\": \"Café data – São Paulo\""));
        assert!(!json.contains('\u{FFFD}'));
    }
}
