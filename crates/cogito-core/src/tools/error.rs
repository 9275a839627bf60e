//! Error types for tool operations

use crate::error::{CogitoError, UnifiedError};

/// Failure raised before a tool reaches the provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// Arguments are missing, of the wrong type, or out of range
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        field: Option<String>,
        message: String,
    },

    /// No tool with this name is registered
    #[error("Tool not found: {0}")]
    NotFound(String),
}

impl ToolError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::invalid(field, format!("missing required argument '{}'", field))
    }
}

impl UnifiedError for ToolError {
    fn error_code(&self) -> &str {
        match self {
            ToolError::InvalidArguments { .. } => "TOOL_INVALID_ARGS",
            ToolError::NotFound(_) => "TOOL_NOT_FOUND",
        }
    }
}

impl From<ToolError> for CogitoError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments {
                field: Some(field),
                message,
            } => CogitoError::invalid_field(field, message),
            ToolError::InvalidArguments { field: None, message } => {
                CogitoError::invalid_input(message)
            }
            ToolError::NotFound(name) => CogitoError::unknown_tool(name),
        }
    }
}
