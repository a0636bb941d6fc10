//! Tool Router - builds the rmcp ToolRouter.
//!
//! This module builds the ToolRouter for the STDIO/TCP transport by
//! delegating to the tool definitions themselves. Each tool knows how to
//! create its own route; every route owns a clone of the configuration and
//! of the shared upstream HTTP client.

use std::sync::Arc;

use reqwest::Client;
use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    NftOwnersTool, TrendingCollectionsTool, UserCollectionsTool, UserTotalValueTool,
};
use crate::core::config::Config;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, http: Client) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(NftOwnersTool::create_route(config.clone(), http.clone()))
        .with_route(TrendingCollectionsTool::create_route(
            config.clone(),
            http.clone(),
        ))
        .with_route(UserCollectionsTool::create_route(
            config.clone(),
            http.clone(),
        ))
        .with_route(UserTotalValueTool::create_route(config, http))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::tools::build_http_client;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let config = test_config();
        let http = build_http_client(&config.upstream).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(config, http);
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get-nft-owners"));
        assert!(names.contains(&"get-top-selling-collections"));
        assert!(names.contains(&"get-user-collections"));
        assert!(names.contains(&"get-user-total-value"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry_names = ToolRegistry::tool_names();

        let config = test_config();
        let http = build_http_client(&config.upstream).unwrap();
        let router: ToolRouter<TestServer> = build_tool_router(config, http);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
