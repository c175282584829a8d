use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::token::Token;
use crate::error::RefreshError;
use crate::sources::FetchToken;

/// Single-credential token cache.
///
/// Readers take the shared side of the lock and never wait on the provider;
/// the maintainer is the only writer.
#[derive(Debug)]
pub struct TokenCache<P> {
    provider: P,
    current: RwLock<Token>,
}

impl<P: FetchToken> TokenCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            current: RwLock::new(Token::default()),
        }
    }

    /// Return the most recently cached token, or the empty sentinel if no
    /// refresh has ever succeeded.
    pub async fn token(&self) -> Token {
        self.current.read().await.clone()
    }

    /// Fetch a fresh token and swap it in.
    ///
    /// The provider call runs before the write lock is taken, so readers
    /// keep the old value for the whole duration of the network round trip.
    /// On failure the cached value is left untouched.
    pub async fn refresh(&self) -> Result<Token, RefreshError> {
        let fresh = self.provider.fetch_token().await?;
        let mut current = self.current.write().await;
        *current = fresh.clone();
        debug!("token cache updated, expires_at: {}", fresh.expires_at);
        Ok(fresh)
    }
}
