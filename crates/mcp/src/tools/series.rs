// Catalog-driven per-series tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::discovery::into_tool_result;
use crate::tools::{json_schema_object, json_schema_string, Tool};
use anyhow::{Context, Result};
use riksbank_client::{RiksbankClient, SeriesInfo};
use serde::Deserialize;

/// Tool bound to one fixed series from the catalog.
///
/// One instance is registered per [`riksbank_client::SERIES_CATALOG`] entry;
/// all of them are the generic fetcher with the series identifier baked in.
pub struct SeriesDataTool {
    client: RiksbankClient,
    info: &'static SeriesInfo,
}

impl SeriesDataTool {
    pub fn new(client: RiksbankClient, info: &'static SeriesInfo) -> Self {
        Self { client, info }
    }
}

#[derive(Debug, Deserialize)]
struct SeriesDataArgs {
    #[serde(default)]
    policy_round: Option<String>,
}

#[async_trait::async_trait]
impl Tool for SeriesDataTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.info.tool_name.to_string(),
            description: self.info.description.to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "policy_round": json_schema_string(
                        "Optional policy round (e.g., '2024:3' or 'latest')"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SeriesDataArgs = serde_json::from_value(arguments)
            .with_context(|| format!("Invalid arguments for {}", self.info.tool_name))?;

        into_tool_result(
            self.client
                .policy_data(self.info.series_id, args.policy_round.as_deref())
                .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riksbank_client::{ClientConfig, RetryConfig, SERIES_CATALOG};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_client(base_url: &str) -> RiksbankClient {
        RiksbankClient::from_config(ClientConfig {
            base_url: url::Url::parse(base_url).unwrap(),
            timeout: Duration::from_secs(5),
            retry: RetryConfig::no_retry(),
        })
    }

    fn catalog_entry(tool_name: &str) -> &'static SeriesInfo {
        SERIES_CATALOG
            .iter()
            .find(|s| s.tool_name == tool_name)
            .unwrap()
    }

    #[tokio::test]
    async fn test_series_tool_uses_fixed_series_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data"))
            .and(query_param("series_id", "SEQGDPNAYCA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"forecasts": []})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SeriesDataTool::new(create_client(&server.uri()), catalog_entry("get_gdp_data"));
        let result = tool.execute(json!({})).await.unwrap();
        assert!(result.is_error.is_none());
    }

    #[tokio::test]
    async fn test_series_tool_forwards_policy_round() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data"))
            .and(query_param("series_id", "SEQRATENAYNA"))
            .and(query_param("policy_round", "2024:3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"forecasts": []})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SeriesDataTool::new(
            create_client(&server.uri()),
            catalog_entry("get_policy_rate_data"),
        );
        let result = tool
            .execute(json!({"policy_round": "2024:3"}))
            .await
            .unwrap();
        assert!(result.is_error.is_none());
    }

    #[test]
    fn test_schema_names_match_catalog() {
        let client = create_client("https://example.com/v1/forecasts");

        for info in SERIES_CATALOG {
            let tool = SeriesDataTool::new(client.clone(), info);
            let schema = tool.schema();
            assert_eq!(schema.name, info.tool_name);
            assert!(schema.input_schema["properties"]["policy_round"].is_object());
        }
    }
}
