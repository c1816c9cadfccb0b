// Discovery tools and the generic data fetcher

use crate::protocol::{CallToolResult, ToolContent, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use riksbank_client::{RiksbankClient, RiksbankResult};
use serde::Deserialize;

/// Render a fetch outcome as a tool result.
///
/// Upstream failures surface as tool-execution failures (`is_error`), not as
/// JSON-RPC errors: the call itself succeeded, the data did not arrive.
pub(crate) fn into_tool_result(result: RiksbankResult<serde_json::Value>) -> Result<CallToolResult> {
    match result {
        Ok(value) => {
            let json = serde_json::to_string_pretty(&value)?;
            Ok(CallToolResult {
                content: vec![ToolContent::text(json)],
                is_error: None,
            })
        }
        Err(e) => Ok(CallToolResult {
            content: vec![ToolContent::error(format!("Riksbank request failed: {}", e))],
            is_error: Some(true),
        }),
    }
}

/// Tool to list all available policy round identifiers
pub struct ListPolicyRoundsTool {
    client: RiksbankClient,
}

impl ListPolicyRoundsTool {
    pub fn new(client: RiksbankClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListPolicyRoundsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_policy_rounds".to_string(),
            description: "List all available policy round identifiers. Policy rounds use the \
                format 'YYYY:I' (e.g., '2025:2') and represent discrete forecast publication \
                sets from Monetary Policy Reports or Updates."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        into_tool_result(self.client.policy_rounds().await)
    }
}

/// Tool to list all available data series with metadata
pub struct ListSeriesTool {
    client: RiksbankClient,
}

impl ListSeriesTool {
    pub fn new(client: RiksbankClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListSeriesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_series_ids".to_string(),
            description: "List all available economic data series with metadata, including \
                series IDs, descriptions, units, source agencies, and decimal precision."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        into_tool_result(self.client.series().await)
    }
}

/// Generic fetcher accepting any series identifier
pub struct PolicyDataTool {
    client: RiksbankClient,
}

impl PolicyDataTool {
    pub fn new(client: RiksbankClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct PolicyDataArgs {
    series_id: String,
    #[serde(default)]
    policy_round: Option<String>,
}

#[async_trait::async_trait]
impl Tool for PolicyDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_policy_data".to_string(),
            description: "Fetch forecast and observation data for any Riksbank series \
                identifier, with cutoff-date annotations."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "series_id": json_schema_string(
                        "The Riksbank series identifier (e.g., 'SEQGDPNAYCA')"
                    ),
                    "policy_round": json_schema_string(
                        "Optional policy round filter (e.g., '2024:3' or 'latest')"
                    )
                }),
                vec!["series_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: PolicyDataArgs =
            serde_json::from_value(arguments).context("Invalid arguments for get_policy_data")?;

        into_tool_result(
            self.client
                .policy_data(&args.series_id, args.policy_round.as_deref())
                .await,
        )
    }
}
