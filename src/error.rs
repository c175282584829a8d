use thiserror::Error;

/// Fatal construction-time errors.
///
/// Anything that goes wrong while resolving the issuer's discovery document
/// means the source cannot be built at all; nothing here is retried.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("discovery request to '{url}' failed: {source}")]
    DiscoveryRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("discovery endpoint '{url}' returned {status}")]
    DiscoveryStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Covers both a missing `token_endpoint` field and a non-string one.
    #[error("malformed discovery document: {0}")]
    DiscoveryDecode(#[source] serde_json::Error),
}

/// Recoverable refresh-cycle errors.
///
/// The maintainer logs these, keeps the previously cached token and retries
/// with backoff; callers of `token()` never see them.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed token response: {0}")]
    Decode(#[source] serde_json::Error),
}
