use std::time::Duration;

use chrono::Utc;

/// Token structure
///
/// Immutable once fetched. The empty default is the sentinel served
/// before the first successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    /// validity window reported by the provider at fetch time
    pub valid_for: Duration,
    pub expires_at: i64, // UNIX TIMESTAMP
}

impl Token {
    pub fn new(value: String, valid_for: Duration) -> Self {
        let expires_at = Utc::now().timestamp() + valid_for.as_secs() as i64;
        Self {
            value,
            valid_for,
            expires_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check if token is expired
    ///
    /// Staleness, not an error, is what readers must watch for: `token()`
    /// never fails, it just keeps serving the last known-good value.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}
