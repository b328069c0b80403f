//! Rate limit information.

/// Rate limit information for a specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,

    /// Unix timestamp when the rate limit resets.
    pub reset: u64,

    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Returns true if at least `requests` requests remain.
    #[must_use]
    pub fn covers(&self, requests: usize) -> bool {
        usize::try_from(self.remaining).map_or(true, |remaining| remaining >= requests)
    }

    /// Seconds until the window resets, relative to the Unix time `now`.
    #[must_use]
    pub fn seconds_until_reset(&self, now: u64) -> u64 {
        self.reset.saturating_sub(now)
    }
}
