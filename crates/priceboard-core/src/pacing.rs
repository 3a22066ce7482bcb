//! Inter-request pacing for the provider's per-minute quota.
//!
//! The free tier allows 5 calls per minute, which the pipeline respects
//! by spacing consecutive calls at least 13 seconds apart. Fetching is
//! strictly sequential — with a shared quota this small, parallel
//! requests would only trade waits for throttling errors.

use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use governor::clock::DefaultClock;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Enforces a minimum interval between the starts of consecutive
/// provider calls within one run.
///
/// The first acquisition never waits, and there is no trailing wait:
/// callers pace immediately before a call and never after the last one.
pub struct RequestPacer {
    limiter: DirectRateLimiter,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        let period = min_interval.max(Duration::from_millis(1));
        let quota = Quota::with_period(period)
            .expect("pacing period is always greater than zero")
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: RateLimiter::direct(quota),
        }
    }

    /// Wait until the next call is allowed; reports the time slept so the
    /// caller can surface the wait to the operator.
    pub async fn pace(&self) -> Duration {
        let started = Instant::now();
        self.limiter.until_ready().await;
        started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_acquisition_does_not_wait() {
        let pacer = RequestPacer::new(Duration::from_secs(60));
        let waited = pacer.pace().await;
        assert!(waited < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn consecutive_acquisitions_are_spaced_apart() {
        let pacer = RequestPacer::new(Duration::from_millis(60));
        pacer.pace().await;

        let waited = pacer.pace().await;
        assert!(waited >= Duration::from_millis(30));
    }
}
