//! Read loop and writer task

use super::McpServer;
use crate::mcp::error::McpError;
use crate::mcp::protocol::McpResponse;
use crate::mcp::transport::{self, LineReader, LineWriter};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const REPLY_BUFFER: usize = 64;

impl McpServer {
    /// Serve on the process's stdin and stdout
    pub async fn serve_stdio(self: Arc<Self>, shutdown: CancellationToken) -> Result<(), McpError> {
        let (reader, writer) = transport::stdio();
        self.serve(reader, writer, shutdown).await
    }

    /// Serve until end of input or `shutdown`.
    ///
    /// On exit every in-flight call is cancelled and awaited, then any
    /// queued replies are flushed.
    pub async fn serve<R, W>(
        self: Arc<Self>,
        mut reader: LineReader<R>,
        mut writer: LineWriter<W>,
        shutdown: CancellationToken,
    ) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin + Send,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(
            tools = self.registry.tool_names().len(),
            provider = self.registry.client().provider_name(),
            "MCP server started"
        );

        let (replies, mut outbox) = mpsc::channel::<McpResponse>(REPLY_BUFFER);
        let writer_task = tokio::spawn(async move {
            while let Some(response) = outbox.recv().await {
                writer.send(&response).await?;
            }
            Ok::<(), McpError>(())
        });

        let mut tasks = JoinSet::new();
        let mut read_error = None;

        loop {
            let line = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                line = reader.next_line() => line,
            };

            let line = match line {
                Ok(Some(line)) => line,
                Ok(None) => {
                    info!("input closed");
                    break;
                }
                Err(e @ McpError::Parse { .. }) => {
                    warn!(error = %e, "unreadable input line");
                    let response = McpResponse::error(None, e.to_rpc_error());
                    if replies.send(response).await.is_err() {
                        error!("writer stopped; ending session");
                        break;
                    }
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "failed to read input");
                    read_error = Some(e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line, &replies, &mut tasks).await {
                if replies.send(response).await.is_err() {
                    error!("writer stopped; ending session");
                    break;
                }
            }

            while let Some(finished) = tasks.try_join_next() {
                if let Err(e) = finished {
                    error!(error = %e, "tool call task failed");
                }
            }
        }

        self.cancel_all().await;
        while let Some(finished) = tasks.join_next().await {
            if let Err(e) = finished {
                error!(error = %e, "tool call task failed");
            }
        }
        drop(replies);

        let written = writer_task
            .await
            .map_err(|e| McpError::internal(format!("writer task failed: {}", e)))?;
        debug!("MCP server stopped");

        match read_error {
            Some(e) => Err(e),
            None => written,
        }
    }
}
