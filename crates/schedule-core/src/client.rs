//! HTTP client for the schedule page
//!
//! One GET per run. There is no retry: a failed request or a non-success
//! status aborts the scrape.

use std::time::Duration;

use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::{Result, ScheduleError};

/// Default Accept header for HTML content
const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// HTTP client fetching the schedule page
///
/// This client:
/// - Sends a browser-like User-Agent
/// - Fails fast after the configured timeout
/// - Treats any non-2xx status as fatal
pub struct ScheduleClient {
    /// Underlying HTTP client
    client: reqwest::Client,
}

impl ScheduleClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(DEFAULT_ACCEPT),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the HTML body at `url`.
    ///
    /// # Arguments
    /// * `url` - Absolute http(s) URL
    ///
    /// # Returns
    /// The response body as text
    ///
    /// # Errors
    /// - `ScheduleError::InvalidUrl` - `url` is not an absolute http(s) URL
    /// - `ScheduleError::Network` - Connection, timeout or body read failure
    /// - `ScheduleError::HttpStatus` - Server returned a non-success status
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = parse_url(url)?;

        tracing::info!(url = %parsed, "fetching schedule page");
        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScheduleError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::info!(bytes = body.len(), status = status.as_u16(), "fetched schedule page");
        Ok(body)
    }
}

/// Parse and validate an http(s) URL.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ScheduleError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ScheduleError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_client_creation() {
        let client = ScheduleClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            user_agent: "schedule-test/1.0".to_string(),
            timeout_secs: 5,
        };
        assert!(ScheduleClient::with_config(&config).is_ok());
    }

    #[test]
    fn test_parse_url_rejects_non_http() {
        assert!(parse_url("https://example.com/schedule").is_ok());
        assert!(matches!(parse_url("ftp://example.com/"), Err(ScheduleError::InvalidUrl(_))));
        assert!(matches!(parse_url("not a url"), Err(ScheduleError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule"))
            .and(header("user-agent", "schedule-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig {
            user_agent: "schedule-test/1.0".to_string(),
            ..ClientConfig::default()
        };
        let client = ScheduleClient::with_config(&config).unwrap();
        let body = client.fetch(&format!("{}/schedule", server.uri())).await.unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = ScheduleClient::new().unwrap();
        let result = client.fetch(&format!("{}/schedule", server.uri())).await;

        match result {
            Err(ScheduleError::HttpStatus { status, .. }) => assert_eq!(status, 503),
            other => panic!("Expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        // Nothing listens on port 1
        let client = ScheduleClient::new().unwrap();
        let result = client.fetch("http://127.0.0.1:1/schedule").await;
        assert!(matches!(result, Err(ScheduleError::Network(_))));
    }
}
