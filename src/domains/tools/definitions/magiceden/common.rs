//! Shared Magic Eden response types and fetch helpers.
//!
//! Every optional level of the upstream JSON decodes permissively: a
//! missing list becomes empty, a missing field becomes its default, and a
//! missing floor price becomes `None`. Only a body that is not JSON at all
//! surfaces as an error.

use reqwest::Client;
use serde::Deserialize;

use super::super::common::ApiError;
use crate::core::config::UpstreamConfig;

/// Collections requested from the user-collections endpoint (first page
/// only; no pagination on this endpoint).
pub(crate) const USER_COLLECTIONS_PAGE_LIMIT: usize = 100;

/// Response shape of the trending-collections endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub collections: Vec<TrendingCollection>,
}

/// One trending collection with its sale count for the queried period.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendingCollection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub count: u64,
}

/// Response shape of the user-collections endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UserCollectionsResponse {
    #[serde(default)]
    pub collections: Vec<OwnedCollectionEntry>,
}

/// One entry of the user-collections response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnedCollectionEntry {
    #[serde(default)]
    pub collection: OwnedCollection,
}

/// A collection owned by a user, with its optional floor ask.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedCollection {
    #[serde(default)]
    pub name: String,

    pub floor_ask_price: Option<FloorAsk>,
}

/// The nested floor-ask object.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorAsk {
    pub amount: Option<FloorAmount>,
}

/// The nested floor-ask amount.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorAmount {
    pub decimal: Option<f64>,
}

impl OwnedCollection {
    /// Floor price in MON, when the upstream reports one at every level.
    pub fn floor_price(&self) -> Option<f64> {
        self.floor_ask_price
            .as_ref()
            .and_then(|ask| ask.amount.as_ref())
            .and_then(|amount| amount.decimal)
    }
}

/// Fetch the first page of collections owned by a user.
///
/// Shared by the user-collections and total-value tools, which consume the
/// same endpoint and shape.
pub(crate) async fn fetch_user_collections(
    http: &Client,
    upstream: &UpstreamConfig,
    address: &str,
) -> Result<Vec<OwnedCollectionEntry>, ApiError> {
    let url = upstream.user_collections_url(address);

    let response = http
        .get(&url)
        .query(&[
            ("includeTopBid", "false".to_string()),
            ("includeLiquidCount", "false".to_string()),
            ("offset", "0".to_string()),
            ("limit", USER_COLLECTIONS_PAGE_LIMIT.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::from_status("MagicEden", status));
    }

    let body: UserCollectionsResponse = response.json().await?;
    Ok(body.collections)
}

#[cfg(test)]
pub(crate) fn owned_entry(name: &str, floor: Option<f64>) -> OwnedCollectionEntry {
    OwnedCollectionEntry {
        collection: OwnedCollection {
            name: name.to_string(),
            floor_ask_price: floor.map(|decimal| FloorAsk {
                amount: Some(FloorAmount {
                    decimal: Some(decimal),
                }),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_response_decodes() {
        let json = r#"{ "collections": [ { "name": "Mondays", "count": 42 } ] }"#;
        let response: TrendingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.collections.len(), 1);
        assert_eq!(response.collections[0].name, "Mondays");
        assert_eq!(response.collections[0].count, 42);
    }

    #[test]
    fn test_trending_response_defaults() {
        let response: TrendingResponse = serde_json::from_str("{}").unwrap();
        assert!(response.collections.is_empty());

        let json = r#"{ "collections": [ {} ] }"#;
        let response: TrendingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.collections[0].name, "");
        assert_eq!(response.collections[0].count, 0);
    }

    #[test]
    fn test_user_collections_decodes_floor_price() {
        let json = r#"{
            "collections": [
                { "collection": { "name": "Alpha", "floorAskPrice": { "amount": { "decimal": 2.5 } } } },
                { "collection": { "name": "Beta" } }
            ]
        }"#;
        let response: UserCollectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.collections[0].collection.floor_price(), Some(2.5));
        assert_eq!(response.collections[1].collection.floor_price(), None);
    }

    #[test]
    fn test_user_collections_partial_floor_ask() {
        // Present floorAskPrice with missing inner levels still means "no price".
        let json = r#"{
            "collections": [
                { "collection": { "name": "Gamma", "floorAskPrice": { "amount": null } } },
                { "collection": { "name": "Delta", "floorAskPrice": { "amount": { "decimal": null } } } }
            ]
        }"#;
        let response: UserCollectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.collections[0].collection.floor_price(), None);
        assert_eq!(response.collections[1].collection.floor_price(), None);
    }

    #[test]
    fn test_user_collections_defaults() {
        let response: UserCollectionsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.collections.is_empty());

        let json = r#"{ "collections": [ {} ] }"#;
        let response: UserCollectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.collections[0].collection.name, "");
        assert_eq!(response.collections[0].collection.floor_price(), None);
    }
}
