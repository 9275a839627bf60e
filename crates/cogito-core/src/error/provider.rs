//! Provider call failures and their retry classification

use super::types::UnifiedError;
use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Failure of a single call (or a whole retry loop) against a remote provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Non-2xx HTTP response
    #[error("{provider} API error (status {status}): {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    /// Request exceeded the configured timeout
    #[error("{provider} request timed out")]
    Timeout { provider: String },

    /// Connection could not be established or was reset
    #[error("{provider} connection failed: {message}")]
    Connection { provider: String, message: String },

    /// 2xx response without the expected field
    #[error("{provider} returned an unexpected response: {message}")]
    MalformedResponse { provider: String, message: String },

    /// Credential for the selected provider is missing
    #[error("{provider} API key not provided")]
    MissingCredential { provider: String },

    /// Request could not be built or sent for a non-transient reason
    #[error("{provider} request failed: {message}")]
    Request { provider: String, message: String },

    /// Retry budget spent; carries the last retryable failure
    #[error("gave up after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        last: Box<ProviderError>,
    },
}

impl ProviderError {
    /// Build a status error
    pub fn status(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            provider: provider.into(),
            status,
            body: body.into(),
        }
    }

    /// Build a malformed-response error
    pub fn malformed(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Translate a transport error from reqwest.
    ///
    /// Timeouts and connect failures are kept distinct so the retry loop can
    /// classify them. A body that failed mid-stream, or a connection the peer
    /// dropped after accepting it, counts as a reset.
    pub fn from_reqwest(provider: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if error.is_connect() || error.is_body() || is_connection_dropped(&error) {
            Self::Connection {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        } else if error.is_decode() {
            Self::malformed(provider, error.to_string())
        } else {
            Self::Request {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Exhausted { last, .. } => last.status_code(),
            _ => None,
        }
    }
}

/// Walk the source chain looking for a peer that closed or reset the socket.
fn is_connection_dropped(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = error.source();
    while let Some(cause) = source {
        if let Some(hyper_error) = cause.downcast_ref::<hyper::Error>() {
            if hyper_error.is_incomplete_message() || hyper_error.is_closed() {
                return true;
            }
        }
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_error.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

impl UnifiedError for ProviderError {
    fn error_code(&self) -> &str {
        match self {
            Self::Status { .. } => "PROVIDER_STATUS",
            Self::Timeout { .. } => "PROVIDER_TIMEOUT",
            Self::Connection { .. } => "PROVIDER_CONNECTION",
            Self::MalformedResponse { .. } => "PROVIDER_MALFORMED_RESPONSE",
            Self::MissingCredential { .. } => "PROVIDER_MISSING_CREDENTIAL",
            Self::Request { .. } => "PROVIDER_REQUEST",
            Self::Exhausted { .. } => "PROVIDER_EXHAUSTED",
        }
    }

    /// 429, 503, timeouts and connection resets are transient.
    /// Everything else, including an exhausted retry loop, is final.
    fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => matches!(status, 429 | 503),
            Self::Timeout { .. } | Self::Connection { .. } => true,
            _ => false,
        }
    }
}
