//! User collections tool.
//!
//! Lists the NFT collections owned by a user, ranked by floor price. A
//! missing floor price ranks as 0 but displays a placeholder instead.

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

/// Collections kept after ranking.
const TOP_COLLECTIONS: usize = 30;

/// Parameters for the user collections tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserCollectionsParams {
    /// The user address to list collections for.
    #[schemars(description = "Magic Eden user address on Monad testnet")]
    pub address: String,
}

/// User collections tool implementation.
#[derive(Debug, Clone)]
pub struct UserCollectionsTool;

impl UserCollectionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-user-collections";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve NFT collections owned by a user on Magic Eden, ranked by floor price";

    /// Execute the tool logic.
    pub async fn execute(
        params: &UserCollectionsParams,
        config: &Config,
        http: &Client,
    ) -> CallToolResult {
        let address = &params.address;
        info!("Fetching collections owned by {}", address);

        match fetch_user_collections(http, &config.upstream, address).await {
            Ok(entries) => {
                let top = rank_by_floor_price(entries, TOP_COLLECTIONS);
                success_result(format_owned_collections(&top))
            }
            Err(e) => error_result(&format!(
                "Failed to fetch user collections for {address}: {e}"
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UserCollectionsParams>(),
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
                let params: UserCollectionsParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &config, &http).await)
            }
            .boxed()
        })
    }
}

/// Sort entries by floor price, descending, and keep the first `top_n`.
///
/// A missing floor price ranks as 0, which places those entries after any
/// positive price. The sort is stable: ties, including all price-less
/// entries, keep upstream order.
fn rank_by_floor_price(
    mut entries: Vec<OwnedCollectionEntry>,
    top_n: usize,
) -> Vec<OwnedCollectionEntry> {
    entries.sort_by(|a, b| {
        let price_a = a.collection.floor_price().unwrap_or(0.0);
        let price_b = b.collection.floor_price().unwrap_or(0.0);
        price_b.total_cmp(&price_a)
    });
    entries.truncate(top_n);
    entries
}

/// Format entries, one line each: `<name>: <price> MON`, or a placeholder
/// when the collection has no floor price.
fn format_owned_collections(entries: &[OwnedCollectionEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let name = &entry.collection.name;
            match entry.collection.floor_price() {
                Some(price) => format!("{name}: {price} MON"),
                None => format!("{name}: no floor price available"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
