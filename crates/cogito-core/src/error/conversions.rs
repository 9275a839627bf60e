//! From trait implementations for CogitoError conversions

use super::types::CogitoError;

impl From<std::io::Error> for CogitoError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for CogitoError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<toml::de::Error> for CogitoError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(format!("Failed to parse TOML config: {}", error))
    }
}

impl From<crate::mcp::McpError> for CogitoError {
    fn from(error: crate::mcp::McpError) -> Self {
        Self::protocol(error.to_string())
    }
}
