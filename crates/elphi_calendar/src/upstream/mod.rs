//! HTTP clients for the Elbphilharmonie services.
//!
//! [`ElphiClient`] implements the source traits of
//! `elphi_calendar_core::upstream` on top of a shared `reqwest::Client`.
//! None of the calls retry. Dropping a returned future aborts the request.

mod events;
mod favorites;
mod schedule;

use std::time::Duration;

use elphi_calendar_core::upstream::{Result, UpstreamError};

use crate::config::Config;

/// Default location of the favorites API.
pub const DEFAULT_FAVORITES_URL: &str = "https://merkliste.elbphilharmonie.de/api";
/// Default location of the event API.
pub const DEFAULT_EVENTS_URL: &str = "https://www.elbphilharmonie.de/de/api/booking/evis";

/// HTTP client for the Elbphilharmonie favorites, event and schedule endpoints.
#[derive(Debug, Clone)]
pub struct ElphiClient {
    client: reqwest::Client,
    favorites_url: String,
    events_url: String,
}

impl ElphiClient {
    /// Create a new client with the given base URLs.
    pub fn new(
        client: reqwest::Client,
        favorites_url: impl Into<String>,
        events_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            favorites_url: favorites_url.into().trim_end_matches('/').to_string(),
            events_url: events_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create from the application configuration.
    pub fn from_config(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        Ok(Self::new(
            client,
            config.favorites_url.clone(),
            config.events_url.clone(),
        ))
    }

    /// Send a GET request.
    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!(url, "Fetching from upstream");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|err| request_error(url, err))
    }

    /// Read the full body of a successful response.
    async fn body(&self, url: &str, response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|err| request_error(url, err))?;
        Ok(bytes.to_vec())
    }
}

fn request_error(url: &str, err: reqwest::Error) -> UpstreamError {
    UpstreamError::Request {
        url: url.to_string(),
        message: err.to_string(),
    }
}
