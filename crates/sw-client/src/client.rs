//! Sync HTTP client for the backend's public site API.

use std::time::Duration;

use ureq::Agent;

use sw_model::{QuoteRequest, SiteProject};
use sw_render::{QuoteTransport, SubmitError};

use crate::error::FetchError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Configuration for [`SiteClient`].
///
/// Passed in whole at construction so the client carries no hidden
/// dependency on ambient process state.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend API base URL (trailing slash tolerated).
    pub base_url: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Backend API client.
///
/// Holds a pooled agent; cheap to share behind an `Arc` across a UI
/// runtime.
pub struct SiteClient {
    agent: Agent,
    base_url: String,
}

impl SiteClient {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch a published site snapshot.
    ///
    /// One round-trip: no retries, no caching. The caller converts every
    /// error into a renderable state; see [`FetchError`].
    ///
    /// # Errors
    ///
    /// [`FetchError::NotFound`] for HTTP 404, [`FetchError::Status`] for
    /// other non-2xx responses, [`FetchError::Transport`] when the
    /// request never completes, [`FetchError::Decode`] for an
    /// undecodable body.
    pub fn fetch_site(&self, slug: &str) -> Result<SiteProject, FetchError> {
        let url = format!("{}/sites/{slug}/public/", self.base_url);

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|error| FetchError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status == 404 {
            return Err(FetchError::NotFound);
        }
        if !(200..300).contains(&status) {
            let body = body
                .read_to_string()
                .unwrap_or_else(|_| String::from("(unable to read error body)"));
            return Err(FetchError::Status { status, body });
        }

        let text = body
            .read_to_string()
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl QuoteTransport for SiteClient {
    /// Deliver a quote request scoped to a site.
    ///
    /// 2xx clears the form on the caller's side; anything else surfaces
    /// the server's `message` when its error body carries one.
    fn submit_quote(&self, site_slug: &str, request: &QuoteRequest) -> Result<(), SubmitError> {
        let url = format!("{}/sites/{site_slug}/quote-requests/", self.base_url);

        let response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|error| SubmitError::Transport(error.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }

        let body = response.into_body().read_to_string().unwrap_or_default();
        tracing::warn!(site = %site_slug, status, "Quote request rejected");
        Err(SubmitError::Rejected {
            status,
            message: parse_error_message(&body).unwrap_or_default(),
        })
    }
}

/// Pull the `message` field out of a JSON error body, when there is one.
fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}
