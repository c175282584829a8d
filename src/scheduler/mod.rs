/// Scheduler module
///
/// The maintainer loop: wakes at the schedule's deadline, refreshes the
/// cache, recomputes the deadline from the new token's lifetime and backs
/// off on failure. Runs until the stop signal fires.

pub mod schedule;

use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info, warn};

use crate::cache::token_cache::TokenCache;
use crate::resilience::retry::RetryBackoff;
use crate::scheduler::schedule::RefreshSchedule;
use crate::sources::FetchToken;

pub async fn run<P: FetchToken>(
    cache: Arc<TokenCache<P>>,
    mut schedule: RefreshSchedule,
    backoff: RetryBackoff,
    mut stop: watch::Receiver<bool>,
) {
    let mut consecutive_failures: u32 = 0;
    loop {
        if !schedule.is_due(Instant::now()) {
            tokio::select! {
                _ = sleep_until(schedule.next_deadline()) => {}
                _ = stop.changed() => {
                    debug!("maintainer stopped");
                    return;
                }
            }
        }

        match cache.refresh().await {
            Ok(token) => {
                consecutive_failures = 0;
                schedule.record_success(Instant::now(), token.valid_for);
                info!(
                    "token refreshed, valid for {}s, next refresh in {}s",
                    token.valid_for.as_secs(),
                    (schedule.next_deadline() - Instant::now()).as_secs()
                );
                if token.valid_for.is_zero() {
                    // a zero-validity token leaves the deadline permanently
                    // elapsed; pace the cycle like a failed one
                    warn!("provider returned a token with no validity window");
                    tokio::select! {
                        _ = sleep(backoff.delay_for(1)) => {}
                        _ = stop.changed() => return,
                    }
                }
            }
            Err(err) => {
                consecutive_failures += 1;
                let delay = backoff.delay_for(consecutive_failures);
                warn!(
                    "token refresh failed (attempt {}): {}; retrying in {}ms",
                    consecutive_failures,
                    err,
                    delay.as_millis()
                );
                tokio::select! {
                    _ = sleep(delay) => {}
                    _ = stop.changed() => return,
                }
            }
        }
    }
}
