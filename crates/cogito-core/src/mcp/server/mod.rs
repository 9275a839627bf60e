//! MCP server: dispatch of requests to the tool registry
//!
//! The read loop runs on the caller's task. Each `tools/call` runs on its own
//! spawned task and every response goes through one writer task, so output
//! lines never interleave. In-flight calls are tracked by request id so that
//! `notifications/cancelled` (and end of input) can stop their retry loops.

mod dispatch;
mod outcome;
mod serve;

pub use outcome::{DEGRADED_PREFIX, tool_outcome};

use super::protocol::RequestId;
use super::types::McpServerInfo;
use crate::config::FailurePolicy;
use crate::tools::ToolRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Stdio MCP server over a [`ToolRegistry`]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    failure_policy: FailurePolicy,
    server_info: McpServerInfo,
    in_flight: Arc<Mutex<HashMap<RequestId, CancellationToken>>>,
}

impl McpServer {
    pub fn new(registry: Arc<ToolRegistry>, failure_policy: FailurePolicy) -> Self {
        Self {
            registry,
            failure_policy,
            server_info: McpServerInfo::default(),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn with_server_info(mut self, server_info: McpServerInfo) -> Self {
        self.server_info = server_info;
        self
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Number of tool calls currently running
    pub async fn in_flight_count(&self) -> usize {
        self.in_flight.lock().await.len()
    }

    /// Fire the token of every running call
    pub async fn cancel_all(&self) {
        let mut in_flight = self.in_flight.lock().await;
        for (id, token) in in_flight.drain() {
            tracing::debug!(request_id = %id, "cancelling in-flight call");
            token.cancel();
        }
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer")
            .field("server_info", &self.server_info)
            .field("failure_policy", &self.failure_policy)
            .field("registry", &self.registry)
            .finish()
    }
}
