//! Turning a finished tool call into a protocol reply

use crate::config::FailurePolicy;
use crate::error::{CogitoError, CogitoResult};
use crate::mcp::error::McpError;
use crate::mcp::protocol::McpRpcError;
use crate::mcp::types::McpToolResult;

/// Text prefix of a degraded tool result
pub const DEGRADED_PREFIX: &str = "[degraded] Service temporarily unavailable: ";

/// Reply for a finished `tools/call`, or `None` when the call was cancelled.
///
/// Caller errors are always JSON-RPC errors. Provider failures follow
/// `policy`: a degraded text result flagged `isError`, or `-32603`.
pub fn tool_outcome(
    result: CogitoResult<String>,
    policy: FailurePolicy,
) -> Option<Result<McpToolResult, McpRpcError>> {
    match result {
        Ok(text) => Some(Ok(McpToolResult::text(text))),
        Err(CogitoError::Cancelled) => None,
        Err(err) if err.is_caller_error() => Some(Err(McpError::from(err).to_rpc_error())),
        Err(CogitoError::Provider(err)) => match policy {
            FailurePolicy::Degrade => Some(Ok(McpToolResult::error_text(format!(
                "{}{}",
                DEGRADED_PREFIX, err
            )))),
            FailurePolicy::Error => Some(Err(McpError::internal(err.to_string()).to_rpc_error())),
        },
        Err(other) => Some(Err(McpError::from(other).to_rpc_error())),
    }
}
