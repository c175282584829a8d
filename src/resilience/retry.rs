use std::time::Duration;

use crate::utils::constants::{DEFAULT_RETRY_BASE_DELAY_MS, DEFAULT_RETRY_MAX_DELAY_MS};

/// Backoff policy for failed refresh cycles.
#[derive(Debug, Clone)]
pub struct RetryBackoff {
    /// will be multiplied by 2 on every consecutive failure until max_delay_ms
    pub base_delay_ms: u64,
    /// max delay for retrying
    /// invariant: >= base_delay_ms
    pub max_delay_ms: u64,
}

impl RetryBackoff {
    /// Delay before the next attempt after `consecutive_failures` failures
    /// in a row (1-based).
    pub fn delay_for(&self, consecutive_failures: u32) -> Duration {
        let exponent = consecutive_failures.saturating_sub(1).min(16);
        let delay = self
            .base_delay_ms
            .saturating_mul(1u64 << exponent)
            .min(self.max_delay_ms);
        Duration::from_millis(delay)
    }
}

impl Default for RetryBackoff {
    fn default() -> Self {
        Self {
            base_delay_ms: DEFAULT_RETRY_BASE_DELAY_MS,
            max_delay_ms: DEFAULT_RETRY_MAX_DELAY_MS,
        }
    }
}
