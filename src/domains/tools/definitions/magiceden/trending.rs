//! Trending collections tool.
//!
//! Fetches a single page of top-selling collections from Magic Eden for a
//! given period and ranks them by sale count.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Client;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::common::{TrendingCollection, TrendingResponse};
use super::super::common::{ApiError, error_result, success_result};
use crate::core::config::Config;

/// Collections requested per query; a single page is authoritative.
const TRENDING_LIMIT: usize = 50;

/// Parameters for the trending collections tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrendingCollectionsParams {
    /// Sales aggregation period, forwarded verbatim to Magic Eden.
    #[schemars(description = "Sales aggregation period (e.g. 1h, 1d, 7d, 30d)")]
    pub period: String,
}

/// Trending collections tool implementation.
#[derive(Debug, Clone)]
pub struct TrendingCollectionsTool;

impl TrendingCollectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-top-selling-collections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve top selling NFT collections on Magic Eden for the Monad testnet";

    /// Execute the tool logic.
    pub async fn execute(
        params: &TrendingCollectionsParams,
        config: &Config,
        http: &Client,
    ) -> CallToolResult {
        info!("Fetching trending collections for period {}", params.period);

        match fetch_trending(http, config, &params.period).await {
            Ok(collections) => success_result(format_trending(&rank_by_sales(collections))),
            Err(e) => error_result(&format!("Failed to fetch trending collections: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TrendingCollectionsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    pub fn create_route<S>(config: Arc<Config>, http: Client) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            let http = http.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: TrendingCollectionsParams =
                    serde_json::from_value(Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config, &http).await)
            }
            .boxed()
        })
    }
}

/// Fetch one page of trending collections.
async fn fetch_trending(
    http: &Client,
    config: &Config,
    period: &str,
) -> Result<Vec<TrendingCollection>, ApiError> {
    let url = config.upstream.trending_url();

    let response = http
        .get(&url)
        .query(&[
            ("period", period.to_string()),
            ("limit", TRENDING_LIMIT.to_string()),
            ("sortBy", "sales".to_string()),
            ("normalizeRoyalties", "false".to_string()),
            ("useNonFlaggedFloorAsk", "false".to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status("MagicEden", status));
    }

    let body: TrendingResponse = response.json().await?;
    Ok(body.collections)
}

/// Sort collections by sale count, descending. Stable: equal counts keep
/// upstream order.
fn rank_by_sales(mut collections: Vec<TrendingCollection>) -> Vec<TrendingCollection> {
    collections.sort_by(|a, b| b.count.cmp(&a.count));
    collections
}

/// Format ranked collections, one `<name>: <count> sales` line each.
fn format_trending(collections: &[TrendingCollection]) -> String {
    collections
        .iter()
        .map(|c| format!("{}: {} sales", c.name, c.count))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(name: &str, count: u64) -> TrendingCollection {
        TrendingCollection {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_rank_by_sales_descending() {
        let ranked = rank_by_sales(vec![
            collection("low", 3),
            collection("high", 90),
            collection("mid", 17),
        ]);

        let counts: Vec<u64> = ranked.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![90, 17, 3]);
    }

    #[test]
    fn test_rank_by_sales_stable_for_ties() {
        let ranked = rank_by_sales(vec![
            collection("first", 10),
            collection("second", 10),
            collection("third", 25),
            collection("fourth", 10),
        ]);

        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn test_format_trending() {
        let lines = format_trending(&[collection("Alpha", 12), collection("Beta", 3)]);
        assert_eq!(lines, "Alpha: 12 sales\nBeta: 3 sales");
    }

    #[test]
    fn test_format_trending_empty() {
        assert_eq!(format_trending(&[]), "");
    }

    // Integration test (requires network, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_execute_against_live_api() {
        let config = Config::default();
        let http = crate::domains::tools::build_http_client(&config.upstream).unwrap();
        let params = TrendingCollectionsParams {
            period: "1d".to_string(),
        };
        let result = TrendingCollectionsTool::execute(&params, &config, &http).await;
        assert_eq!(result.content.len(), 1);
    }
}
