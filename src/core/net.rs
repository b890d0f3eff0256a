// src/core/net.rs
// Blocking HTTP GET. One client per run, no retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use crate::config::consts::USER_AGENT;
use crate::error::FetchError;

/// Anything that can turn a URL into page text.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    /// Body text on exactly 200; any other status is a failure.
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        let status = resp.status();
        if status != StatusCode::OK {
            debug!(url, status = status.as_u16(), "non-200 response");
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        let body = resp.text().map_err(transport)?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
