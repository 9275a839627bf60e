//! Retry policy

use crate::config::RetrySettings;
use crate::error::{CogitoError, CogitoResult};
use std::time::Duration;

/// Bounded retry with exponential backoff and no jitter.
///
/// The delay before attempt `i` (counting from 1) is
/// `base_delay * 2^(i - 2)` for `i >= 2`: 1s, 2s, 4s with the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1_000),
        }
    }
}

impl RetryPolicy {
    /// # Errors
    ///
    /// Zero attempts is a configuration error.
    pub fn new(max_attempts: u32, base_delay: Duration) -> CogitoResult<Self> {
        if max_attempts == 0 {
            return Err(CogitoError::config("Retry policy needs at least one attempt"));
        }
        Ok(Self {
            max_attempts,
            base_delay,
        })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Backoff to sleep before `attempt`. Zero for the first attempt.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        if attempt < 2 {
            return Duration::ZERO;
        }
        2u32.checked_pow(attempt - 2)
            .and_then(|factor| self.base_delay.checked_mul(factor))
            .unwrap_or(Duration::MAX)
    }
}

impl TryFrom<&RetrySettings> for RetryPolicy {
    type Error = CogitoError;

    fn try_from(settings: &RetrySettings) -> Result<Self, Self::Error> {
        Self::new(
            settings.max_attempts,
            Duration::from_millis(settings.base_delay_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_from_base() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_before(1), Duration::ZERO);
        assert_eq!(policy.delay_before(2), Duration::from_secs(1));
        assert_eq!(policy.delay_before(3), Duration::from_secs(2));
        assert_eq!(policy.delay_before(4), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_saturates() {
        let policy = RetryPolicy::new(100, Duration::from_secs(1)).unwrap();
        assert_eq!(policy.delay_before(80), Duration::MAX);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        assert!(RetryPolicy::new(0, Duration::from_secs(1)).is_err());
        let settings = RetrySettings {
            max_attempts: 0,
            base_delay_ms: 10,
        };
        assert!(RetryPolicy::try_from(&settings).is_err());
    }
}
