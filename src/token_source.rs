use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cache::token::Token;
use crate::cache::token_cache::TokenCache;
use crate::error::ConfigurationError;
use crate::resilience::retry::RetryBackoff;
use crate::scheduler::schedule::RefreshSchedule;
use crate::scheduler;
use crate::sources::oauth2::ConfidentialClient;
use crate::sources::FetchToken;
use crate::utils::constants::DEFAULT_REFRESH_FRACTION;

/// Tunables for the maintainer. Defaults refresh at the token's half-life
/// and back off from 500ms up to 30s across failed cycles.
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    pub refresh_fraction: u32,
    pub retry: RetryBackoff,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            refresh_fraction: DEFAULT_REFRESH_FRACTION,
            retry: RetryBackoff::default(),
        }
    }
}

/// Self-maintained token source.
///
/// `token()` only reads the cache; the spawned maintainer task is the sole
/// writer and the only caller of the credential provider.
#[derive(Debug)]
pub struct MaintainedTokenSource<P: FetchToken = ConfidentialClient> {
    cache: Arc<TokenCache<P>>,
    stop: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl MaintainedTokenSource<ConfidentialClient> {
    /// Build a source for a confidential client and start maintaining it.
    ///
    /// Fails only when the issuer's discovery document cannot be resolved;
    /// an unreachable token endpoint is left to the background retries.
    pub async fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        issuer_url: &str,
    ) -> Result<Self, ConfigurationError> {
        let provider = ConfidentialClient::discover(client_id, client_secret, issuer_url).await?;
        Ok(Self::with_provider(provider, RefreshOptions::default()).await)
    }
}

impl<P: FetchToken> MaintainedTokenSource<P> {
    /// Build a source around an arbitrary provider.
    ///
    /// One bootstrap refresh runs before the maintainer task starts, so a
    /// reachable provider yields a non-empty first `token()`. A failed
    /// bootstrap is tolerated and retried by the background loop.
    pub async fn with_provider(provider: P, options: RefreshOptions) -> Self {
        let cache = Arc::new(TokenCache::new(provider));
        let mut schedule = RefreshSchedule::new(options.refresh_fraction);

        match cache.refresh().await {
            Ok(token) => schedule.record_success(Instant::now(), token.valid_for),
            Err(err) => warn!("initial token fetch failed: {err}"),
        }

        let (stop, stop_rx) = watch::channel(false);
        let handle = tokio::spawn(scheduler::run(
            Arc::clone(&cache),
            schedule,
            options.retry,
            stop_rx,
        ));

        Self {
            cache,
            stop,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Current token; the empty sentinel before the first successful fetch.
    pub async fn token(&self) -> Token {
        self.cache.token().await
    }

    /// Stop the maintainer and wait for it to wind down.
    pub async fn shutdown(&self) {
        let _ = self.stop.send(true);
        let handle = self.handle.lock().await.take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        debug!("token source shut down");
    }
}

impl<P: FetchToken> Drop for MaintainedTokenSource<P> {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
        if let Ok(mut handle) = self.handle.try_lock() {
            if let Some(handle) = handle.take() {
                handle.abort();
            }
        }
    }
}
