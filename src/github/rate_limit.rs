//! Rate limit details attached to rate-limit failures.
//!
//! The exporter does not back off; when GitHub refuses a request for rate
//! limit reasons the gateway queries `/rate_limit` once so the error can tell
//! the user when the quota resets.

use chrono::{DateTime, Utc};

/// Snapshot of the core rate limit returned by GitHub's `/rate_limit`
/// endpoint.
///
/// # Example
///
/// ```
/// use ferry::github::rate_limit::RateLimitInfo;
///
/// let info = RateLimitInfo::new(0, 1_700_000_000);
/// assert!(info.is_exhausted());
/// assert_eq!(info.reset_at(), 1_700_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit snapshot.
    #[must_use]
    pub const fn new(remaining: u32, reset_at: u64) -> Self {
        Self {
            remaining,
            reset_at,
        }
    }

    /// Returns the Unix timestamp when the rate limit resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns the reset moment as a UTC timestamp, when representable.
    #[must_use]
    pub fn reset_time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.reset_at)
            .ok()
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    /// Returns true if no requests remain in the current window.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}
