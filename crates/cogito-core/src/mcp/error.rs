//! MCP error types

use super::protocol::McpRpcError;
use crate::error::{CogitoError, UnifiedError};
use thiserror::Error;

/// Errors raised while serving the protocol
#[derive(Debug, Error, Clone)]
pub enum McpError {
    /// Line was not valid JSON
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Valid JSON that is not a JSON-RPC request or notification
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("Invalid params: {message}")]
    InvalidParams { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Reading from or writing to the stream failed
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl McpError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// JSON-RPC error object for this failure
    pub fn to_rpc_error(&self) -> McpRpcError {
        let code = match self {
            Self::Parse { .. } => McpRpcError::PARSE_ERROR,
            Self::InvalidRequest { .. } => McpRpcError::INVALID_REQUEST,
            Self::MethodNotFound { .. } => McpRpcError::METHOD_NOT_FOUND,
            Self::InvalidParams { .. } => McpRpcError::INVALID_PARAMS,
            Self::Internal { .. } | Self::Transport { .. } => McpRpcError::INTERNAL_ERROR,
        };
        McpRpcError::new(code, self.to_string())
    }
}

impl UnifiedError for McpError {
    fn error_code(&self) -> &str {
        match self {
            Self::Parse { .. } => "MCP_PARSE",
            Self::InvalidRequest { .. } => "MCP_INVALID_REQUEST",
            Self::MethodNotFound { .. } => "MCP_METHOD_NOT_FOUND",
            Self::InvalidParams { .. } => "MCP_INVALID_PARAMS",
            Self::Internal { .. } => "MCP_INTERNAL",
            Self::Transport { .. } => "MCP_TRANSPORT",
        }
    }
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("serialization failed: {}", err))
    }
}

/// Map a tool call failure onto the JSON-RPC taxonomy.
///
/// Unknown tools are reported as method-not-found, bad arguments as
/// invalid-params, everything else as an internal error.
impl From<CogitoError> for McpError {
    fn from(err: CogitoError) -> Self {
        match err {
            CogitoError::UnknownTool { name } => Self::method_not_found(format!("tool '{}'", name)),
            CogitoError::InvalidInput { message, field } => Self::invalid_params(match field {
                Some(field) if !message.contains(&field) => format!("{}: {}", field, message),
                _ => message,
            }),
            other => Self::internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn test_caller_errors_map_to_client_codes() {
        let unknown: McpError = CogitoError::unknown_tool("nope").into();
        assert_eq!(unknown.to_rpc_error().code, -32601);

        let invalid: McpError = CogitoError::invalid_field("text", "missing").into();
        let rpc = invalid.to_rpc_error();
        assert_eq!(rpc.code, -32602);
        assert!(rpc.message.contains("text: missing"));
    }

    #[test]
    fn test_provider_errors_are_internal() {
        let err: McpError = CogitoError::from(ProviderError::status("gemini", 500, "boom")).into();
        assert_eq!(err.to_rpc_error().code, -32603);
    }
}
