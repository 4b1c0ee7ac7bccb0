//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use schedule_core::config::{DEFAULT_OUTPUT_STEM, DEFAULT_TIMEOUT_SECS, SCHEDULE_URL};
use schedule_core::{ClientConfig, ScrapeConfig};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Error,
    Warn,
    /// Progress messages (default)
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub(crate) fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "nicar-schedule")]
#[command(about = "Scrape the NICAR conference schedule into JSON and CSV", version)]
pub(crate) struct Cli {
    /// Schedule page to scrape
    #[arg(long, default_value = SCHEDULE_URL)]
    pub(crate) url: String,

    /// Output path stem; ".json" and ".csv" are appended
    #[arg(short, long, default_value = DEFAULT_OUTPUT_STEM)]
    pub(crate) out: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub(crate) timeout: u64,

    /// Sort sessions by day and time instead of page order
    #[arg(long)]
    pub(crate) sort: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value = "info")]
    pub(crate) log_level: LogLevel,

    /// Only log errors (overrides --log-level)
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Cli {
    pub(crate) fn effective_log_level(&self) -> LogLevel {
        if self.quiet {
            LogLevel::Error
        } else {
            self.log_level
        }
    }

    pub(crate) fn scrape_config(&self) -> ScrapeConfig {
        let defaults = ScrapeConfig::default();
        ScrapeConfig {
            url: self.url.clone(),
            client: ClientConfig {
                timeout_secs: self.timeout,
                ..defaults.client
            },
            sort: self.sort,
            ..defaults
        }
    }
}
