//! User portfolio value tool.
//!
//! Sums the floor prices of every collection owned by a user and reports
//! the total in MON, rounded to 2 decimal places.

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

use super::common::{OwnedCollectionEntry, fetch_user_collections};
use super::super::common::{error_result, success_result};
use crate::core::config::Config;

/// Parameters for the portfolio value tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserTotalValueParams {
    /// The user address to value.
    #[schemars(description = "Magic Eden user address on Monad testnet")]
    pub address: String,
}

/// Portfolio value tool implementation.
#[derive(Debug, Clone)]
pub struct UserTotalValueTool;

impl UserTotalValueTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-user-total-value";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Calculate the total floor price value in MON of all NFT collections owned by a user";

    /// Execute the tool logic.
    pub async fn execute(
        params: &UserTotalValueParams,
        config: &Config,
        http: &Client,
    ) -> CallToolResult {
        let address = &params.address;
        info!("Calculating portfolio value for {}", address);

        match fetch_user_collections(http, &config.upstream, address).await {
            Ok(entries) => success_result(summarize_portfolio(&entries)),
            Err(e) => error_result(&format!(
                "Failed to calculate total value for {address}: {e}"
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UserTotalValueParams>(),
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
                let params: UserTotalValueParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config, &http).await)
            }
            .boxed()
        })
    }
}

/// Sum floor prices with a missing price contributing exactly 0.
fn total_floor_value(entries: &[OwnedCollectionEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| entry.collection.floor_price().unwrap_or(0.0))
        .sum()
}

/// Round to 2 decimal places, half away from zero.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build the single summary line for a portfolio.
///
/// The rounded total renders in shortest form (`0`, `3.1`, `10.15`).
fn summarize_portfolio(entries: &[OwnedCollectionEntry]) -> String {
    format!(
        "Total estimated floor value: {} MON",
        round_to_cents(total_floor_value(entries))
    )
}
