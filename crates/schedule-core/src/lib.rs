//! NICAR Schedule Scraper Core Library
//!
//! This crate scrapes a conference schedule page and writes its sessions
//! as JSON and CSV.
//!
//! # Features
//! - Single-request fetch of the schedule page
//! - Day → time slot → session extraction driven by configurable selectors
//! - Text cleanup, time range splitting and speaker lists
//! - All-or-nothing JSON + CSV output from one in-memory record list

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::ScheduleClient;
pub use config::{ClientConfig, ScrapeConfig, SelectorConfig};
pub use error::{ErrorKind, Result, ScheduleError};
pub use output::{to_csv, to_json, write_outputs, OutputPaths};
pub use self::scraper::{sort_chronologically, ScheduleScraper};
pub use types::{RawSession, Schedule, Session, CSV_COLUMNS};
