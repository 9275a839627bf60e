//! Sliding-window rate limiter

use super::types::RateLimitConfig;
use crate::error::{CogitoError, CogitoResult};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Sliding-window rate limiter
///
/// Keeps the timestamps of recent admissions. Pruning, the capacity check
/// and recording the new timestamp all happen under one lock, so two
/// concurrent callers can never claim the same slot. Waiters sleep without
/// holding the lock and re-check afterwards.
///
/// Cloning shares the underlying window.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    window: Arc<Mutex<VecDeque<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `max_requests` is zero or the
    /// window is empty; such a limiter would block forever.
    pub fn new(config: RateLimitConfig) -> CogitoResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            window: Arc::new(Mutex::new(VecDeque::with_capacity(
                config.max_requests as usize,
            ))),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Wait until the window has room, then record an admission.
    ///
    /// Returns how long the caller was held back.
    pub async fn admit(&self) -> Duration {
        let start = Instant::now();

        loop {
            let wait = {
                let mut window = self.window.lock().await;
                let now = Instant::now();
                self.prune(&mut window, now);

                if window.len() < self.config.max_requests as usize {
                    window.push_back(now);
                    let waited = now.duration_since(start);
                    debug!(
                        in_window = window.len(),
                        max_requests = self.config.max_requests,
                        waited_ms = waited.as_millis() as u64,
                        "rate limiter admitted call"
                    );
                    return waited;
                }

                match window.front() {
                    Some(oldest) => self
                        .config
                        .window
                        .saturating_sub(now.duration_since(*oldest)),
                    None => Duration::ZERO,
                }
            };

            warn!(
                wait_ms = wait.as_millis() as u64,
                "rate limiter: window full, waiting"
            );
            sleep(wait).await;
        }
    }

    /// Like [`admit`](Self::admit), but gives up when `cancel` fires.
    pub async fn admit_or_cancel(&self, cancel: &CancellationToken) -> CogitoResult<Duration> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CogitoError::Cancelled),
            waited = self.admit() => Ok(waited),
        }
    }

    /// Number of admissions still inside the current window
    pub async fn pending_len(&self) -> usize {
        let mut window = self.window.lock().await;
        self.prune(&mut window, Instant::now());
        window.len()
    }

    fn prune(&self, window: &mut VecDeque<Instant>, now: Instant) {
        while let Some(oldest) = window.front() {
            if now.duration_since(*oldest) >= self.config.window {
                window.pop_front();
            } else {
                break;
            }
        }
    }
}
