//! MCP protocol message types
//!
//! Implements the JSON-RPC envelope used by MCP.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version constant
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC version
pub const JSONRPC_VERSION: &str = "2.0";

/// Messages a server receives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum McpMessage {
    /// Request message (has an id, expects a response)
    Request(McpRequest),
    /// Notification message (no id)
    Notification(McpNotification),
}

impl McpMessage {
    pub fn jsonrpc(&self) -> &str {
        match self {
            Self::Request(req) => &req.jsonrpc,
            Self::Notification(n) => &n.jsonrpc,
        }
    }
}

/// Request ID (can be string or number)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
}

impl RequestId {
    /// Best-effort id extraction from a message that failed to parse
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.get("id")?.clone()).ok()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: RequestId,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC response
///
/// `id` is serialized as `null` when the request id could not be read,
/// as required for parse errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<RequestId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<McpRpcError>,
}

impl McpResponse {
    /// Create a success response
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Option<RequestId>, error: McpRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

impl std::fmt::Display for McpRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for McpRpcError {}

/// JSON-RPC notification (no id, no response expected)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// MCP method names
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const INITIALIZED: &str = "notifications/initialized";
    pub const PING: &str = "ping";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
    pub const CANCELLED: &str = "notifications/cancelled";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_and_notification_are_distinguished() {
        let request: McpMessage =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap();
        match request {
            McpMessage::Request(request) => assert_eq!(request.id, RequestId::Number(7)),
            other => panic!("expected request, got {other:?}"),
        }

        let notification: McpMessage = serde_json::from_str(
            r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{"requestId":"a"}}"#,
        )
        .unwrap();
        match notification {
            McpMessage::Notification(n) => assert_eq!(n.method, methods::CANCELLED),
            other => panic!("expected notification, got {other:?}"),
        }
    }

    #[test]
    fn test_error_response_with_null_id() {
        let error = McpRpcError::new(McpRpcError::PARSE_ERROR, "bad line");
        let response = McpResponse::error(None, error);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], Value::Null);
        assert_eq!(value["error"]["code"], json!(-32700));
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_success_response_shape() {
        let response = McpResponse::success(RequestId::String("abc".into()), json!({}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "jsonrpc": "2.0", "id": "abc", "result": {} }));
    }

    #[test]
    fn test_request_id_from_broken_message() {
        let value = json!({ "id": 3, "method": 12 });
        assert_eq!(RequestId::from_value(&value), Some(RequestId::Number(3)));
        assert_eq!(RequestId::from_value(&json!({})), None);
    }
}
