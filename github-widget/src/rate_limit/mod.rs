//! Rate limit inspection for the GitHub API.
//!
//! These helpers only report the quota and never wait for a reset.

mod info;

pub use info::RateLimitInfo;

use octocrab::Octocrab;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Worst-case API requests for one widget: repository, latest commit, latest release.
pub const REQUESTS_PER_WIDGET: usize = 3;

/// Checks the current rate limit status for the core API.
///
/// Querying the rate limit does not count against it.
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Logs a warning if the quota cannot cover `widgets` widgets.
///
/// Returns `true` if the quota is sufficient.
pub fn check_budget(info: &RateLimitInfo, widgets: usize) -> bool {
    let needed = widgets.saturating_mul(REQUESTS_PER_WIDGET);
    if info.covers(needed) {
        debug!(remaining = info.remaining, needed, "Rate limit sufficient");
        return true;
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    warn!(
        remaining = info.remaining,
        limit = info.limit,
        needed,
        reset_in_secs = info.seconds_until_reset(now),
        "GitHub rate limit may run out; some widgets will render as not found"
    );
    false
}
