//! Per-message dispatch

use super::McpServer;
use super::outcome::tool_outcome;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{
    JSONRPC_VERSION, McpMessage, McpNotification, McpRequest, McpResponse, RequestId, methods,
};
use crate::mcp::types::{CallToolParams, CancelledParams, InitializeResult, McpTool};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, info, info_span, warn};

impl McpServer {
    /// Handle one input line.
    ///
    /// Returns the immediate reply, if any. A `tools/call` that passes
    /// validation is spawned onto `tasks` and replies through `replies`
    /// when it finishes.
    pub(super) async fn handle_line(
        self: &Arc<Self>,
        line: &str,
        replies: &mpsc::Sender<McpResponse>,
        tasks: &mut JoinSet<()>,
    ) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable input line");
                return Some(error_response(None, McpError::parse(e.to_string())));
            }
        };

        let id = RequestId::from_value(&value);
        if id.is_none() && value.get("id").is_some() {
            warn!("request id is neither a string nor an integer");
            return Some(error_response(
                None,
                McpError::invalid_request("id must be a string or an integer"),
            ));
        }

        let message: McpMessage = match serde_json::from_value(value) {
            Ok(message) => message,
            Err(e) => {
                warn!(error = %e, "not a JSON-RPC request or notification");
                return Some(error_response(id, McpError::invalid_request(e.to_string())));
            }
        };

        if message.jsonrpc() != JSONRPC_VERSION {
            return Some(error_response(
                id,
                McpError::invalid_request(format!(
                    "unsupported jsonrpc version '{}'",
                    message.jsonrpc()
                )),
            ));
        }

        match message {
            McpMessage::Request(request) => self.handle_request(request, replies, tasks).await,
            McpMessage::Notification(notification) => {
                self.handle_notification(notification).await;
                None
            }
        }
    }

    async fn handle_request(
        self: &Arc<Self>,
        request: McpRequest,
        replies: &mpsc::Sender<McpResponse>,
        tasks: &mut JoinSet<()>,
    ) -> Option<McpResponse> {
        debug!(id = %request.id, method = %request.method, "request received");
        let id = request.id;

        match request.method.as_str() {
            methods::INITIALIZE => {
                info!("client initializing");
                Some(success_response(
                    id,
                    &InitializeResult::new(self.server_info.clone()),
                ))
            }
            methods::PING => Some(McpResponse::success(id, json!({}))),
            methods::TOOLS_LIST => {
                let tools: Vec<McpTool> =
                    self.registry.list().into_iter().map(McpTool::from).collect();
                Some(McpResponse::success(id, json!({ "tools": tools })))
            }
            methods::TOOLS_CALL => self.start_tool_call(id, request.params, replies, tasks).await,
            other => Some(error_response(Some(id), McpError::method_not_found(other))),
        }
    }

    /// Validate a `tools/call` and spawn it.
    ///
    /// Unknown tools and bad arguments are answered here, before any
    /// provider call is made.
    async fn start_tool_call(
        self: &Arc<Self>,
        id: RequestId,
        params: Option<Value>,
        replies: &mpsc::Sender<McpResponse>,
        tasks: &mut JoinSet<()>,
    ) -> Option<McpResponse> {
        let params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(params)) => params,
            Some(Err(e)) => {
                return Some(error_response(Some(id), McpError::invalid_params(e.to_string())));
            }
            None => {
                return Some(error_response(
                    Some(id),
                    McpError::invalid_params("tools/call requires params"),
                ));
            }
        };

        let prompt = match self.registry.prepare(&params.name, params.arguments) {
            Ok(prompt) => prompt,
            Err(e) => {
                debug!(tool = %params.name, error = %e, "tool call rejected");
                return Some(error_response(Some(id), e.into()));
            }
        };

        let token = CancellationToken::new();
        {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(previous) = in_flight.insert(id.clone(), token.clone()) {
                warn!(request_id = %id, "request id reused while in flight");
                previous.cancel();
            }
        }

        let span = info_span!("tools/call", request_id = %id, tool = %params.name);
        let server = Arc::clone(self);
        let replies = replies.clone();
        tasks.spawn(
            async move {
                let result = server.registry.client().generate(&prompt, &token).await;
                {
                    // A cancelled token has already left the table; the id may
                    // now belong to a newer call.
                    let mut in_flight = server.in_flight.lock().await;
                    if !token.is_cancelled() {
                        in_flight.remove(&id);
                    }
                }

                let response = match tool_outcome(result, server.failure_policy) {
                    None => {
                        debug!("call cancelled, no response sent");
                        return;
                    }
                    Some(Ok(tool_result)) => {
                        if tool_result.is_error {
                            warn!("returning degraded result");
                        }
                        success_response(id, &tool_result)
                    }
                    Some(Err(rpc_error)) => McpResponse::error(Some(id), rpc_error),
                };

                if replies.send(response).await.is_err() {
                    warn!("writer closed before response could be sent");
                }
            }
            .instrument(span),
        );

        None
    }

    async fn handle_notification(&self, notification: McpNotification) {
        match notification.method.as_str() {
            methods::INITIALIZED => debug!("client initialized"),
            methods::CANCELLED => {
                let params: CancelledParams = match notification
                    .params
                    .map(serde_json::from_value)
                    .transpose()
                {
                    Ok(Some(params)) => params,
                    Ok(None) | Err(_) => {
                        warn!("ignoring malformed cancellation notification");
                        return;
                    }
                };

                match self.in_flight.lock().await.remove(&params.request_id) {
                    Some(token) => {
                        info!(
                            request_id = %params.request_id,
                            reason = params.reason.as_deref().unwrap_or(""),
                            "cancelling request"
                        );
                        token.cancel();
                    }
                    None => debug!(
                        request_id = %params.request_id,
                        "cancellation for unknown or finished request"
                    ),
                }
            }
            other => debug!(method = other, "ignoring notification"),
        }
    }
}

fn success_response<T: Serialize>(id: RequestId, result: &T) -> McpResponse {
    match serde_json::to_value(result) {
        Ok(value) => McpResponse::success(id, value),
        Err(e) => error_response(Some(id), e.into()),
    }
}

fn error_response(id: Option<RequestId>, error: McpError) -> McpResponse {
    McpResponse::error(id, error.to_rpc_error())
}
