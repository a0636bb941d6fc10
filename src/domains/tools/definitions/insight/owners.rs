//! NFT owner enumeration tool.
//!
//! Retrieves every owner address of an NFT contract from the ThirdWeb
//! Insight API, paginating until the upstream is exhausted. Owners are
//! accumulated in upstream emission order; duplicates are kept as-is.

use std::future::Future;
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
use tracing::{debug, info};

use super::super::common::{ApiError, error_result, is_evm_address, success_result};
use crate::core::config::Config;

/// Owners requested per page. A page of exactly this length forces one more
/// request, since a full page cannot distinguish "more data" from
/// "exhausted on a page boundary".
pub(crate) const OWNERS_PAGE_SIZE: usize = 100;

/// Parameters for the owner enumeration tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftOwnersParams {
    /// The NFT contract address to enumerate owners for.
    #[schemars(description = "NFT contract address (0x-prefixed, 40 hex digits)")]
    pub contract_address: String,
}

/// NFT owner enumeration tool implementation.
#[derive(Debug, Clone)]
pub struct NftOwnersTool;

impl NftOwnersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-nft-owners";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Retrieve all owner addresses of an NFT contract via the ThirdWeb Insight API";

    /// Execute the tool logic.
    pub async fn execute(params: &NftOwnersParams, config: &Config, http: &Client) -> CallToolResult {
        let address = &params.contract_address;
        info!("Enumerating owners for contract {}", address);

        let url = config.upstream.owners_url(address);
        let client_id = config.credentials.thirdweb_client_id.clone();

        let fetched = collect_all_owners(OWNERS_PAGE_SIZE, |page| {
            let http = http.clone();
            let url = url.clone();
            let client_id = client_id.clone();
            async move { fetch_owner_page(&http, &url, &client_id, page).await }
        })
        .await;

        match fetched {
            Err(e) => error_result(&format!("Failed to fetch NFT owners: {e}")),
            Ok(owners) if owners.is_empty() => {
                success_result(format!("No owners found for {address}."))
            }
            Ok(owners) => {
                let mut lines = Vec::with_capacity(owners.len() + 1);
                lines.push(format!("{} owners for {}:", owners.len(), address));
                lines.extend(owners.iter().map(|owner| format!("- {owner}")));
                success_result(lines.join("\n"))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NftOwnersParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the router.
    ///
    /// The contract address is validated here, before any network call;
    /// a malformed address is an input error, never a text result.
    pub fn create_route<S>(config: Arc<Config>, http: Client) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            let http = http.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: NftOwnersParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                if !is_evm_address(&params.contract_address) {
                    return Err(McpError::invalid_params(
                        "contractAddress must be a valid Ethereum address (0x followed by 40 hex digits)"
                            .to_string(),
                        None,
                    ));
                }

                Ok(Self::execute(&params, &config, &http).await)
            }
            .boxed()
        })
    }
}

/// Fetch one page of owner addresses from the Insight API.
async fn fetch_owner_page(
    http: &Client,
    url: &str,
    client_id: &str,
    page: u32,
) -> Result<Vec<String>, ApiError> {
    debug!("Requesting owners page {}", page);

    let response = http
        .get(url)
        .header("x-client-id", client_id)
        .query(&[
            ("limit", OWNERS_PAGE_SIZE.to_string()),
            ("page", page.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status("ThirdWeb", status));
    }

    let body: Value = response.json().await?;
    Ok(extract_owner_page(&body))
}

/// Extract the owner list from one page body.
///
/// The upstream shape is `{ data: [ { owner_addresses: [string] } ] }`.
/// Any deviation (missing `data`, empty array, non-array, missing field)
/// decodes to zero owners for the page.
fn extract_owner_page(body: &Value) -> Vec<String> {
    body.get("data")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.get("owner_addresses"))
        .and_then(Value::as_array)
        .map(|addresses| {
            addresses
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Accumulate owner pages until exhaustion.
///
/// Requests pages 0, 1, 2, … and stops when a page comes back empty or
/// strictly shorter than `page_size`. A page of exactly `page_size` is
/// always followed by another request, even if that next page turns out
/// empty. The first fetch error aborts the loop.
pub(crate) async fn collect_all_owners<F, Fut>(
    page_size: usize,
    mut fetch_page: F,
) -> Result<Vec<String>, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<String>, ApiError>>,
{
    let mut owners = Vec::new();
    let mut page = 0u32;

    loop {
        let batch = fetch_page(page).await?;
        if batch.is_empty() {
            break;
        }

        let last = batch.len() < page_size;
        owners.extend(batch);

        if last {
            break;
        }
        page += 1;
    }

    Ok(owners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pages_of(sizes: &[usize]) -> Vec<Vec<String>> {
        sizes
            .iter()
            .enumerate()
            .map(|(page, n)| (0..*n).map(|i| format!("0xowner{page}_{i}")).collect())
            .collect()
    }

    #[test]
    fn test_params_accept_camel_case() {
        let json = r#"{"contractAddress": "0x1234567890abcdefABCDEF1234567890abcdefAB"}"#;
        let params: NftOwnersParams = serde_json::from_str(json).unwrap();
        assert!(is_evm_address(&params.contract_address));
    }

    #[test]
    fn test_extract_owner_page_happy_path() {
        let body = json!({ "data": [ { "owner_addresses": ["0xaa", "0xbb"] } ] });
        assert_eq!(extract_owner_page(&body), vec!["0xaa", "0xbb"]);
    }

    #[test]
    fn test_extract_owner_page_degenerate_shapes() {
        assert!(extract_owner_page(&json!({})).is_empty());
        assert!(extract_owner_page(&json!({ "data": [] })).is_empty());
        assert!(extract_owner_page(&json!({ "data": "nope" })).is_empty());
        assert!(extract_owner_page(&json!({ "data": [{}] })).is_empty());
        assert!(extract_owner_page(&json!({ "data": [{ "owner_addresses": 42 }] })).is_empty());
    }

    #[test]
    fn test_extract_owner_page_skips_non_strings() {
        let body = json!({ "data": [ { "owner_addresses": ["0xaa", 7, "0xbb"] } ] });
        assert_eq!(extract_owner_page(&body), vec!["0xaa", "0xbb"]);
    }

    #[test]
    fn test_pagination_stops_on_short_page() {
        let pages = pages_of(&[100, 100, 50]);
        let mut requests = 0u32;

        let owners = tokio_test::block_on(collect_all_owners(100, |page| {
            requests += 1;
            let batch = pages.get(page as usize).cloned().unwrap_or_default();
            async move { Ok(batch) }
        }))
        .unwrap();

        assert_eq!(requests, 3);
        assert_eq!(owners.len(), 250);
        assert_eq!(owners[0], "0xowner0_0");
        assert_eq!(owners[249], "0xowner2_49");
    }

    #[test]
    fn test_pagination_exact_multiple_needs_empty_page() {
        // 200 owners as [100, 100]: a third request must observe the empty
        // page before the loop can stop.
        let pages = pages_of(&[100, 100]);
        let mut requests = 0u32;

        let owners = tokio_test::block_on(collect_all_owners(100, |page| {
            requests += 1;
            let batch = pages.get(page as usize).cloned().unwrap_or_default();
            async move { Ok(batch) }
        }))
        .unwrap();

        assert_eq!(requests, 3);
        assert_eq!(owners.len(), 200);
    }

    #[test]
    fn test_pagination_empty_first_page() {
        let mut requests = 0u32;

        let owners = tokio_test::block_on(collect_all_owners(100, |_page| {
            requests += 1;
            async move { Ok(Vec::new()) }
        }))
        .unwrap();

        assert_eq!(requests, 1);
        assert!(owners.is_empty());
    }

    #[test]
    fn test_pagination_keeps_duplicates_in_order() {
        let page = vec!["0xaa".to_string(), "0xaa".to_string(), "0xbb".to_string()];

        let owners = tokio_test::block_on(collect_all_owners(100, |_page| {
            let batch = page.clone();
            async move { Ok(batch) }
        }))
        .unwrap();

        assert_eq!(owners, vec!["0xaa", "0xaa", "0xbb"]);
    }

    #[test]
    fn test_upstream_failure_becomes_text_result() {
        use rmcp::model::RawContent;

        let err = ApiError::from_status("ThirdWeb", reqwest::StatusCode::NOT_FOUND);
        let result = error_result(&format!("Failed to fetch NFT owners: {err}"));

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("Failed"));
            assert!(text.text.contains("404"));
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_pagination_aborts_on_error() {
        let pages = pages_of(&[100]);

        let result = tokio_test::block_on(collect_all_owners(100, |page| {
            let outcome = if page == 0 {
                Ok(pages[0].clone())
            } else {
                Err(ApiError::from_status(
                    "ThirdWeb",
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
            };
            async move { outcome }
        }));

        let err = result.err().unwrap();
        assert!(err.to_string().contains("500"));
    }

    // Integration test (requires network and THIRDWEB_CLIENT_ID, run with:
    // cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_execute_against_live_api() {
        let config = crate::core::Config::from_env().unwrap();
        let http = crate::domains::tools::build_http_client(&config.upstream).unwrap();
        let params = NftOwnersParams {
            contract_address: "0x1234567890abcdefABCDEF1234567890abcdefAB".to_string(),
        };
        let result = NftOwnersTool::execute(&params, &config, &http).await;
        assert_eq!(result.content.len(), 1);
    }
}
