// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client downloading a single feed and parsing it into components.

use icalendar::Calendar;
use reqwest::{Client, RequestBuilder};

use crate::config::{AuthMethod, FeedConfig};
use crate::error::FeedError;

/// HTTP client for one calendar feed.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: Client,
    config: FeedConfig,
}

impl FeedClient {
    /// Creates a new feed client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// The URL this client polls.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Downloads the feed and parses it into calendar components.
    ///
    /// # Errors
    ///
    /// Returns an error when the transfer fails, the server answers with a
    /// non-success status, or the payload is not valid iCalendar text.
    #[tracing::instrument(skip(self), fields(url = %self.config.url))]
    pub async fn fetch(&self) -> Result<Calendar, FeedError> {
        let resp = self.build_request().send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let text = resp.text().await?;
        tracing::debug!(bytes = text.len(), "fetched feed payload");

        text.parse().map_err(FeedError::Ical)
    }

    /// Builds the GET request with authentication headers.
    fn build_request(&self) -> RequestBuilder {
        let mut req = self.client.get(&self.config.url);

        match &self.config.auth {
            AuthMethod::Basic { username, password } => {
                req = req.basic_auth(username, Some(password));
            }
            AuthMethod::Bearer { token } => {
                req = req.bearer_auth(token);
            }
            AuthMethod::None => {}
        }

        req
    }
}
