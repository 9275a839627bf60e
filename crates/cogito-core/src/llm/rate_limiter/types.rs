//! Rate limiter configuration

use crate::config::RateLimitSettings;
use crate::error::{CogitoError, CogitoResult};
use std::time::Duration;

/// Configuration for rate limiting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum admissions inside one window
    pub max_requests: u32,
    /// Length of the rolling window
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::from(&RateLimitSettings::default())
    }
}

impl RateLimitConfig {
    /// Create a new rate limit configuration
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// Zero capacity or a zero-length window can never admit sensibly
    pub fn validate(&self) -> CogitoResult<()> {
        if self.max_requests == 0 {
            return Err(CogitoError::config(
                "Rate limit must allow at least one request per window",
            ));
        }
        if self.window.is_zero() {
            return Err(CogitoError::config("Rate limit window must be non-zero"));
        }
        Ok(())
    }
}

impl From<&RateLimitSettings> for RateLimitConfig {
    fn from(settings: &RateLimitSettings) -> Self {
        Self::new(
            settings.max_requests,
            Duration::from_millis(settings.window_ms),
        )
    }
}
