use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::cache::token::Token;
use crate::error::{ConfigurationError, RefreshError};
use crate::sources::FetchToken;
use crate::utils::constants::{DEFAULT_HTTP_TIMEOUT_MS, WELL_KNOWN_CONFIG_PATH};

/// Discovery document, reduced to the single required field.
/// Unknown fields are ignored, a missing or non-string `token_endpoint`
/// is a decode error.
#[derive(Debug, Deserialize)]
struct DiscoveryDocument {
    token_endpoint: String,
}

/// Token endpoint response. `expires_in` is seconds of validity.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// OAuth2 confidential client bound to a discovered token endpoint.
#[derive(Debug, Clone)]
pub struct ConfidentialClient {
    client_id: String,
    client_secret: String,
    token_endpoint: String,
    client: Client,
}

impl ConfidentialClient {
    /// Resolve the issuer's token endpoint and build the client.
    ///
    /// Any discovery problem is a fatal configuration error surfaced to the
    /// caller; nothing here is retried at refresh time.
    pub async fn discover(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        issuer_url: &str,
    ) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS))
            .build()
            .map_err(ConfigurationError::HttpClient)?;

        let url = format!(
            "{}{}",
            issuer_url.trim_end_matches('/'),
            WELL_KNOWN_CONFIG_PATH
        );
        let response =
            client
                .get(&url)
                .send()
                .await
                .map_err(|source| ConfigurationError::DiscoveryRequest {
                    url: url.clone(),
                    source,
                })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConfigurationError::DiscoveryStatus { url, status });
        }
        let body =
            response
                .text()
                .await
                .map_err(|source| ConfigurationError::DiscoveryRequest {
                    url: url.clone(),
                    source,
                })?;
        let document: DiscoveryDocument =
            serde_json::from_str(&body).map_err(ConfigurationError::DiscoveryDecode)?;
        debug!("discovered token endpoint '{}'", document.token_endpoint);

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_endpoint: document.token_endpoint,
            client,
        })
    }

    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }
}

impl FetchToken for ConfidentialClient {
    async fn fetch_token(&self) -> Result<Token, RefreshError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let response = self
            .client
            .post(&self.token_endpoint)
            .form(&form)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Status(status));
        }
        let body = response.text().await?;
        let parsed: TokenResponse = serde_json::from_str(&body).map_err(RefreshError::Decode)?;

        Ok(Token::new(
            parsed.access_token,
            Duration::from_secs(parsed.expires_in),
        ))
    }
}
