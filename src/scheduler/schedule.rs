use std::time::Duration;

use tokio::time::Instant;

use crate::utils::constants::MIN_REFRESH_FRACTION;

/// Proportional-remaining-lifetime refresh policy.
///
/// With the default fraction of 2 the next refresh lands at the token's
/// half-life, leaving the rest of the validity window to absorb refresh
/// latency and transient failures.
#[derive(Debug, Clone)]
pub struct RefreshSchedule {
    issued_at: Instant,
    valid_for: Duration,
    fraction: u32,
}

impl RefreshSchedule {
    /// Starts with a zero-length window, so the first decision is already due.
    pub fn new(fraction: u32) -> Self {
        Self {
            issued_at: Instant::now(),
            valid_for: Duration::ZERO,
            fraction: fraction.max(MIN_REFRESH_FRACTION),
        }
    }

    /// Deadline of the next refresh attempt.
    /// Invariant: strictly before `issued_at + valid_for` whenever the
    /// validity window is non-empty.
    pub fn next_deadline(&self) -> Instant {
        self.issued_at + self.valid_for / self.fraction
    }

    /// Refresh decision: nothing happens before the deadline.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Restart the window from a successful refresh.
    ///
    /// Failed refreshes must not call this; the deadline keeps pointing at
    /// the stale token's fraction point until a fetch lands.
    pub fn record_success(&mut self, issued_at: Instant, valid_for: Duration) {
        self.issued_at = issued_at;
        self.valid_for = valid_for;
    }

    pub fn valid_for(&self) -> Duration {
        self.valid_for
    }
}
