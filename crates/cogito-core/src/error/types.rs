//! Core error types and traits for Cogito

use super::provider::ProviderError;
use thiserror::Error;

/// Result type alias for Cogito operations
pub type CogitoResult<T> = Result<T, CogitoError>;

/// Unified error trait shared by the error enums in this crate.
///
/// - error_code(): stable code for programmatic handling and logs
/// - message(): human-readable message
/// - is_retryable(): whether the retry loop may try again
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error is retryable
    fn is_retryable(&self) -> bool {
        false
    }
}

/// Main error type for Cogito
#[derive(Error, Debug, Clone)]
pub enum CogitoError {
    /// Configuration related errors, raised at startup
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// Caller-supplied arguments have the wrong shape or type
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
    },

    /// Requested tool is not part of the catalogue
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    /// Remote provider failure (after classification and retries)
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Wire protocol violations
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },

    /// The caller went away before the operation finished
    #[error("Operation was cancelled")]
    Cancelled,
}

impl UnifiedError for CogitoError {
    fn error_code(&self) -> &str {
        match self {
            Self::Config { .. } => "COGITO_CONFIG",
            Self::InvalidInput { .. } => "COGITO_INVALID_INPUT",
            Self::UnknownTool { .. } => "COGITO_UNKNOWN_TOOL",
            Self::Provider(err) => err.error_code(),
            Self::Protocol { .. } => "COGITO_PROTOCOL",
            Self::Io { .. } => "COGITO_IO",
            Self::Json { .. } => "COGITO_JSON",
            Self::Cancelled => "COGITO_CANCELLED",
        }
    }

    fn is_retryable(&self) -> bool {
        match self {
            Self::Provider(err) => err.is_retryable(),
            _ => false,
        }
    }
}
