//! Rate limiter for provider API calls
//!
//! Implements a sliding-window limiter: at most N admissions within any
//! rolling window of W. Every outbound attempt, retries included, goes
//! through [`RateLimiter::admit`].

mod types;
mod window;


pub use types::RateLimitConfig;
pub use window::RateLimiter;
