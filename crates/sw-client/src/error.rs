//! Error types for the backend API client.

/// Error from fetching a site snapshot.
///
/// Every variant renders as the same "site not found" state for the end
/// user; the variants exist so the boundary that handles them can log
/// something distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The slug has no published site (HTTP 404).
    #[error("site not found")]
    NotFound,

    /// Server returned a non-2xx status other than 404.
    #[error("HTTP error: {status} - {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Request never completed (connection failure, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body did not decode as a site snapshot.
    #[error("invalid site payload")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// True when the site simply does not exist, as opposed to a
    /// degraded backend. Callers log the latter louder; the rendered
    /// outcome is the same either way.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
