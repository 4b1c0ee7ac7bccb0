//! Scrape configuration
//!
//! Everything that couples the scraper to one particular page lives here:
//! the URL, the output location, the day labels and the CSS selectors.
//! A change in the site's markup should only require touching this module
//! (or overriding the defaults from the CLI).

use scraper::Selector;

use crate::error::{Result, ScheduleError};

/// Schedule page scraped by default
pub const SCHEDULE_URL: &str =
    "https://www.ire.org/events-and-training/conferences/nicar-2019/schedule";

/// Output path stem; `.json` and `.csv` are appended
pub const DEFAULT_OUTPUT_STEM: &str = "schedule/nicar-2019-schedule";

/// Default User-Agent mimicking a desktop browser
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.13; rv:65.0) Gecko/20100101 Firefox/65.0";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Conference days, in the order the day panes appear on the page
pub const NICAR_2019_DATES: [&str; 5] = [
    "2019-03-06",
    "2019-03-07",
    "2019-03-08",
    "2019-03-09",
    "2019-03-10",
];

/// One pane per conference day
pub const DAY_SELECTOR: &str = "ul.schedule-list.pane";
/// Attribute on the day container holding its date, when present
pub const DAY_LABEL_ATTR: &str = "data-date";
/// One entry per session inside a day (or time slot)
pub const SESSION_SELECTOR: &str = "li";
pub const TITLE_SELECTOR: &str = ".event-title";
pub const TIME_SELECTOR: &str = ".event-meta p";
pub const ROOM_SELECTOR: &str = ".event-meta h4";
pub const SPEAKERS_SELECTOR: &str = ".event-speakers";
pub const DESCRIPTION_SELECTOR: &str = ".event-content p:not(.event-speakers)";
pub const TYPE_SELECTOR: &str = ".event-type";
pub const LINK_SELECTOR: &str = ".event-title a";

/// CSS selectors describing the day → time slot → session layout
///
/// Optional entries disable that step: without `slot`, sessions are looked
/// up directly inside each day; without `day_label`, the label comes from
/// `day_label_attr` or the positional day list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub day: String,
    pub day_label: Option<String>,
    pub day_label_attr: Option<String>,
    pub slot: Option<String>,
    pub slot_time: Option<String>,
    pub session: String,
    pub title: String,
    pub time: String,
    pub room: String,
    pub speakers: String,
    pub description: String,
    pub session_type: String,
    pub link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            day: DAY_SELECTOR.to_string(),
            day_label: None,
            day_label_attr: Some(DAY_LABEL_ATTR.to_string()),
            slot: None,
            slot_time: None,
            session: SESSION_SELECTOR.to_string(),
            title: TITLE_SELECTOR.to_string(),
            time: TIME_SELECTOR.to_string(),
            room: ROOM_SELECTOR.to_string(),
            speakers: SPEAKERS_SELECTOR.to_string(),
            description: DESCRIPTION_SELECTOR.to_string(),
            session_type: TYPE_SELECTOR.to_string(),
            link: LINK_SELECTOR.to_string(),
        }
    }
}

/// Compiled form of [`SelectorConfig`]
#[derive(Debug)]
pub struct Selectors {
    pub day: Selector,
    pub day_label: Option<Selector>,
    pub day_label_attr: Option<String>,
    pub slot: Option<Selector>,
    pub slot_time: Option<Selector>,
    pub session: Selector,
    pub title: Selector,
    pub time: Selector,
    pub room: Selector,
    pub speakers: Selector,
    pub description: Selector,
    pub session_type: Selector,
    pub link: Selector,
}

impl SelectorConfig {
    /// Compile every selector string.
    ///
    /// # Errors
    /// `ScheduleError::InvalidSelector` naming the first entry that fails.
    pub fn compile(&self) -> Result<Selectors> {
        Ok(Selectors {
            day: compile("day", &self.day)?,
            day_label: compile_opt("day_label", self.day_label.as_deref())?,
            day_label_attr: self.day_label_attr.clone(),
            slot: compile_opt("slot", self.slot.as_deref())?,
            slot_time: compile_opt("slot_time", self.slot_time.as_deref())?,
            session: compile("session", &self.session)?,
            title: compile("title", &self.title)?,
            time: compile("time", &self.time)?,
            room: compile("room", &self.room)?,
            speakers: compile("speakers", &self.speakers)?,
            description: compile("description", &self.description)?,
            session_type: compile("session_type", &self.session_type)?,
            link: compile("link", &self.link)?,
        })
    }
}

fn compile(name: &'static str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| ScheduleError::InvalidSelector {
        name,
        selector: selector.to_string(),
    })
}

fn compile_opt(name: &'static str, selector: Option<&str>) -> Result<Option<Selector>> {
    selector.map(|s| compile(name, s)).transpose()
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with the request
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Full configuration for one scrape
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Schedule page URL
    pub url: String,
    /// HTTP client settings
    pub client: ClientConfig,
    /// Page structure
    pub selectors: SelectorConfig,
    /// Day labels by position, used when the page does not carry its own
    pub day_labels: Vec<String>,
    /// Sort chronologically instead of keeping document order
    pub sort: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: SCHEDULE_URL.to_string(),
            client: ClientConfig::default(),
            selectors: SelectorConfig::default(),
            day_labels: NICAR_2019_DATES.iter().map(|d| d.to_string()).collect(),
            sort: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors_compile() {
        let compiled = SelectorConfig::default().compile();
        assert!(compiled.is_ok());
        let compiled = compiled.unwrap();
        assert!(compiled.slot.is_none());
        assert_eq!(compiled.day_label_attr.as_deref(), Some("data-date"));
    }

    #[test]
    fn test_invalid_selector_is_named() {
        let config = SelectorConfig {
            room: "h4[".to_string(),
            ..SelectorConfig::default()
        };
        match config.compile() {
            Err(ScheduleError::InvalidSelector { name, selector }) => {
                assert_eq!(name, "room");
                assert_eq!(selector, "h4[");
            }
            other => panic!("Expected InvalidSelector, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_scrape_config_default() {
        let config = ScrapeConfig::default();
        assert_eq!(config.url, SCHEDULE_URL);
        assert_eq!(config.day_labels.len(), 5);
        assert_eq!(config.day_labels[0], "2019-03-06");
        assert_eq!(config.client.timeout_secs, 30);
        assert!(!config.sort);
    }
}
