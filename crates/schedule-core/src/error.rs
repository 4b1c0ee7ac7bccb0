//! Error types for the schedule scraper
//!
//! This module defines all error types used throughout the library.
//! Every variant is fatal for a run; skipped records are not errors and are
//! counted on [`crate::types::Schedule`] instead.

use thiserror::Error;

/// Error type for schedule scraping operations
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// HTTP request failed (connection, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to build a document tree from the response body
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// A configured CSS selector could not be compiled
    #[error("Invalid selector for {name}: {selector}")]
    InvalidSelector { name: &'static str, selector: String },

    /// No sessions were found anywhere in the document
    #[error("No sessions extracted: {0}")]
    Extraction(String),

    /// Writing an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering the JSON document failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification of a [`ScheduleError`], used for exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Extraction,
    Output,
    Config,
}

impl ScheduleError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::Network(_) | ScheduleError::HttpStatus { .. } => ErrorKind::Network,
            ScheduleError::Parse(_) => ErrorKind::Parse,
            ScheduleError::Extraction(_) => ErrorKind::Extraction,
            ScheduleError::Io(_) | ScheduleError::Json(_) => ErrorKind::Output,
            ScheduleError::InvalidUrl(_) | ScheduleError::InvalidSelector { .. } => {
                ErrorKind::Config
            }
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Network => 2,
            ErrorKind::Parse => 3,
            ErrorKind::Extraction => 4,
            ErrorKind::Output => 5,
            ErrorKind::Config => 64,
        }
    }
}

/// Result type alias for schedule scraping operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
