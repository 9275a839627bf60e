//! Model Context Protocol server
//!
//! Newline-delimited JSON-RPC 2.0 over stdio. Only the tool surface of the
//! protocol is served: `initialize`, `ping`, `tools/list`, `tools/call` and
//! cancellation.

pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;
pub mod types;

pub use error::McpError;
pub use protocol::{
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION, McpMessage, McpNotification, McpRequest, McpResponse,
    McpRpcError, RequestId, methods,
};
pub use server::McpServer;
pub use transport::{LineReader, LineWriter};
pub use types::{
    CallToolParams, CancelledParams, InitializeResult, McpCapabilities, McpContent,
    McpServerInfo, McpTool, McpToolResult, ToolCapabilities,
};
