// MCP server: JSON-RPC 2.0 over stdio

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::{debug, info, warn};

const MAX_LINE_LENGTH: usize = 1024 * 1024;

pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve newline-delimited JSON-RPC until stdin closes.
    ///
    /// Stdout carries the protocol; diagnostics must go to stderr.
    pub async fn start(&self) -> Result<()> {
        info!("MCP server listening on stdio");

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = FramedRead::new(stdin, LinesCodec::new_with_max_length(MAX_LINE_LENGTH));

        while let Some(line) = lines.next().await {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "failed to parse request line");
                    let response =
                        JsonRpcResponse::error(serde_json::Value::Null, JsonRpcError::parse_error());
                    write_response(&mut stdout, &response).await?;
                    continue;
                }
            };

            if request.is_notification() {
                self.handle_notification(&request);
                continue;
            }

            let response = self.handle_request(request).await;
            write_response(&mut stdout, &response).await?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    fn handle_notification(&self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" | "notifications/cancelled" => {}
            other => debug!(method = other, "ignoring unknown notification"),
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone().unwrap_or(serde_json::Value::Null);

        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "riksbank-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    async fn handle_tool_call(
        &self,
        id: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params.unwrap_or_default()) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tool call params: {}", e)),
                );
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            );
        };

        let arguments = if params.arguments.is_null() {
            serde_json::json!({})
        } else {
            params.arguments
        };

        debug!(tool = %params.name, "executing tool");
        match tool.execute(arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string())),
        }
    }
}

async fn write_response(stdout: &mut tokio::io::Stdout, response: &JsonRpcResponse) -> Result<()> {
    let mut line = serde_json::to_string(response)?;
    line.push('\n');
    stdout.write_all(line.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
