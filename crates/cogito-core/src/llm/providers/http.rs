//! Shared HTTP client construction

use crate::config::TimeoutConfig;
use crate::error::{CogitoError, CogitoResult};
use reqwest::Client;

/// Build the single HTTP client shared by both backends.
pub fn build_http_client(timeouts: &TimeoutConfig) -> CogitoResult<Client> {
    Client::builder()
        .connect_timeout(timeouts.connection_timeout())
        .timeout(timeouts.request_timeout())
        .user_agent(concat!("cogito/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| {
            CogitoError::config_with_context(
                format!("Failed to build HTTP client: {}", e),
                "Initializing provider gateway",
            )
        })
}
