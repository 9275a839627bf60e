//! Reliability wrapper around the provider gateway
//!
//! Every outbound call goes through the rate limiter and a bounded retry
//! loop with exponential backoff. Callers pass a cancellation token that
//! stops the loop at any await point.

mod accessors;
mod constructor;
mod generate;
mod policy;
mod retry;
#[cfg(test)]
mod tests;
mod types;

pub use policy::RetryPolicy;
pub use types::LlmClient;
