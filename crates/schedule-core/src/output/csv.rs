//! CSV rendering of session lists
//!
//! Quoting follows RFC 4180; columns follow [`CSV_COLUMNS`].

use std::fmt::Write;

use crate::types::{Session, CSV_COLUMNS};

/// Separator between speaker names inside one CSV cell
pub const SPEAKER_SEPARATOR: &str = "; ";

/// Quote a field when it holds a comma, quote or line break (RFC 4180).
pub fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Render sessions as CSV: header row in canonical key order, one row per
/// session, absent values as empty fields.
pub fn to_csv(sessions: &[Session]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_COLUMNS.join(","));
    out.push('\n');

    for session in sessions {
        let row: Vec<String> = cells(session).iter().map(|cell| csv_escape(cell)).collect();
        let _ = write!(out, "{}", row.join(","));
        out.push('\n');
    }

    out
}

/// Cell values of one session, in [`CSV_COLUMNS`] order.
fn cells(s: &Session) -> [String; CSV_COLUMNS.len()] {
    [
        s.day.clone(),
        s.time_start.clone(),
        s.time_end.clone(),
        s.title.clone(),
        s.room.clone().unwrap_or_default(),
        s.speakers.join(SPEAKER_SEPARATOR),
        s.description.clone().unwrap_or_default(),
        s.session_type.clone().unwrap_or_default(),
        s.length_in_hours.map(|h| h.to_string()).unwrap_or_default(),
        s.event_id.clone().unwrap_or_default(),
        s.event_url.clone().unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn session(title: &str) -> Session {
        Session {
            day: "2019-03-08".to_string(),
            time_start: "2:15 PM".to_string(),
            time_end: "3:15 PM".to_string(),
            title: title.to_string(),
            room: Some("Salon A".to_string()),
            speakers: vec!["Jane Doe".to_string(), "John Roe".to_string()],
            description: None,
            session_type: Some("Panel".to_string()),
            length_in_hours: Some(1.0),
            event_id: Some("3433/4129".to_string()),
            event_url: Some("https://www.ire.org/event/3433/4129/".to_string()),
        }
    }

    fn read_rows(csv_text: &str) -> Vec<Vec<String>> {
        ::csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_text.as_bytes())
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_escape("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_to_csv_header_only() {
        assert_eq!(
            to_csv(&[]),
            "day,time_start,time_end,title,room,speakers,description,session_type,length_in_hours,event_id,event_url\n"
        );
    }

    #[test]
    fn test_to_csv_row() {
        let csv_text = to_csv(&[session("Keynote")]);
        let line = csv_text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "2019-03-08,2:15 PM,3:15 PM,Keynote,Salon A,Jane Doe; John Roe,,Panel,1,3433/4129,https://www.ire.org/event/3433/4129/"
        );
    }

    #[test]
    fn test_title_with_comma_and_quote_round_trips() {
        let title = "Data, \"cleaned\"";
        let rows = read_rows(&to_csv(&[session(title)]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][3], title);
        assert_eq!(rows[1].len(), CSV_COLUMNS.len());
    }

    proptest! {
        #[test]
        fn prop_escaped_field_reads_back(s in "[a-z ,\"\\n]{1,30}") {
            let line = format!("{},end\n", csv_escape(&s));
            let rows = read_rows(&line);
            prop_assert_eq!(rows.len(), 1);
            prop_assert_eq!(&rows[0][0], &s);
            prop_assert_eq!(&rows[0][1], "end");
        }
    }
}
