//! Main schedule scraper API
//!
//! This module ties the HTTP client to the parsers: fetch the page, parse it,
//! extract session blocks, and normalize them into records.

use std::collections::HashMap;

use reqwest::Url;

use crate::client::{parse_url, ScheduleClient};
use crate::config::{ScrapeConfig, Selectors};
use crate::error::{Result, ScheduleError};
use crate::parser::{extract_sessions, normalize_all, parse_document, to_minutes};
use crate::types::{Schedule, Session};

/// Scraper for one conference schedule page
///
/// # Example
/// ```no_run
/// use schedule_core::{OutputPaths, ScheduleScraper, ScrapeConfig, write_outputs};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = ScheduleScraper::new(ScrapeConfig::default())?;
///     let schedule = scraper.scrape().await?;
///     write_outputs(&schedule.sessions, &OutputPaths::from_stem("schedule/nicar-2019-schedule"))?;
///     Ok(())
/// }
/// ```
pub struct ScheduleScraper {
    client: ScheduleClient,
    config: ScrapeConfig,
    selectors: Selectors,
    url: Url,
}

impl ScheduleScraper {
    /// Create a new scraper from configuration.
    ///
    /// # Errors
    /// - `ScheduleError::InvalidUrl` if the configured URL is unusable
    /// - `ScheduleError::InvalidSelector` if a selector does not compile
    /// - `ScheduleError::Network` if the HTTP client cannot be created
    pub fn new(config: ScrapeConfig) -> Result<Self> {
        let client = ScheduleClient::with_config(&config.client)?;
        Self::with_client(client, config)
    }

    /// Create a new scraper with a custom client.
    ///
    /// # Arguments
    /// * `client` - Pre-configured ScheduleClient instance
    /// * `config` - Scrape configuration; its `client` section is ignored
    pub fn with_client(client: ScheduleClient, config: ScrapeConfig) -> Result<Self> {
        let url = parse_url(&config.url)?;
        let selectors = config.selectors.compile()?;
        Ok(Self {
            client,
            config,
            selectors,
            url,
        })
    }

    /// Fetch the page and turn it into session records.
    ///
    /// # Errors
    /// - `ScheduleError::Network` / `ScheduleError::HttpStatus` if the fetch fails
    /// - `ScheduleError::Parse` if the body is empty
    /// - `ScheduleError::Extraction` if no session is found
    pub async fn scrape(&self) -> Result<Schedule> {
        let html = self.client.fetch(self.url.as_str()).await?;
        self.scrape_html(&html)
    }

    /// Run everything after the fetch on an already downloaded page.
    pub fn scrape_html(&self, html: &str) -> Result<Schedule> {
        let document = parse_document(html)?;
        let raws = extract_sessions(&document, &self.selectors, &self.config.day_labels)?;
        let raw_count = raws.len();

        let (mut sessions, skipped) = normalize_all(raws, Some(&self.url));
        if sessions.is_empty() {
            return Err(ScheduleError::Extraction(format!(
                "all {raw_count} session block(s) lacked a title"
            )));
        }
        if skipped > 0 {
            tracing::warn!(skipped, "dropped session blocks without a title or day");
        }

        if self.config.sort {
            sort_chronologically(&mut sessions);
        }

        tracing::info!(sessions = sessions.len(), skipped, "extracted schedule");
        Ok(Schedule {
            sessions,
            raw_count,
            skipped,
        })
    }

    /// The page URL this scraper fetches.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Sort by day, start time, end time, then title.
///
/// `sessions` must be in document order: days are ranked by where they first
/// appear, since labels like "Thursday, March 7" do not sort as text.
/// Sessions without a usable time sort after timed ones within their day.
/// The sort is stable, so ties keep document order.
pub fn sort_chronologically(sessions: &mut [Session]) {
    let mut day_rank: HashMap<String, usize> = HashMap::new();
    for session in sessions.iter() {
        let next = day_rank.len();
        day_rank.entry(session.day.clone()).or_insert(next);
    }

    sessions.sort_by(|a, b| {
        day_rank[&a.day]
            .cmp(&day_rank[&b.day])
            .then_with(|| time_key(&a.time_start).cmp(&time_key(&b.time_start)))
            .then_with(|| time_key(&a.time_end).cmp(&time_key(&b.time_end)))
            .then_with(|| a.title.cmp(&b.title))
    });
}

fn time_key(time: &str) -> u32 {
    to_minutes(time).unwrap_or(u32::MAX)
}
