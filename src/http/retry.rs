//! Retry policy for the transport: attempt budget, transient-status
//! classification, and capped exponential backoff with jitter.

use std::time::Duration;

use rand::Rng;
use reqwest::StatusCode;

/// Retry policy applied uniformly to every request the transport issues.
///
/// The policy retries network-level failures, per-attempt timeouts, and
/// responses whose status indicates a server-side or rate-limit condition
/// (5xx and 429). Other statuses surface immediately.
///
/// Retries apply to POST/PATCH/DELETE the same as to GET: a retried write
/// may execute server-side more than once. Callers that need at-most-once
/// semantics must not rely on the transport for them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per logical call, the first one included.
    pub max_attempts: u32,
    /// Backoff before the second attempt; doubles per attempt after that.
    pub base_delay: Duration,
    /// Upper bound on the inter-attempt delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(300),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Whether a response status is worth retrying.
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    /// Delay to sleep after the given failed attempt (1-based).
    ///
    /// Exponential in the attempt number, capped at `max_delay`, and
    /// jittered into `[d/2, d]` so concurrent callers retrying against the
    /// same path do not synchronize. Successive jitter windows touch but do
    /// not overlap, so delays are non-decreasing until the cap; once capped,
    /// attempts share one window and a later delay may land below an
    /// earlier one.
    pub(crate) fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let ceiling = self
            .base_delay
            .saturating_mul(1u32 << exponent)
            .min(self.max_delay);

        let ceiling_ms = ceiling.as_millis() as u64;
        let jittered = rand::thread_rng().gen_range(ceiling_ms / 2..=ceiling_ms);
        Duration::from_millis(jittered)
    }
}
