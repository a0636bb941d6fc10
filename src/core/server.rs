//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. The server only exposes tools; all four tools are read-only
//! queries against upstream NFT market APIs.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines a parameters struct, an `execute()` method with the
//! core logic, and a `create_route()` constructor for the rmcp ToolRouter.
//! The ToolRouter is built dynamically in `domains/tools/router.rs`, so
//! adding a new tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter,
    model::*, service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use super::error::Error;
use crate::domains::tools::{build_http_client, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Tool calls
/// are routed through the dynamically-built ToolRouter; each route owns a
/// clone of the shared HTTP client and configuration.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the shared upstream HTTP client (with the configured request
    /// timeout) and the tool router.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let http = build_http_client(&config.upstream)
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            tool_router: build_tool_router::<Self>(config.clone(), http),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration (for tool access).
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only NFT market data tools for the Monad testnet: owner enumeration, \
                 trending collections, user collections, and portfolio floor value."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_construction() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "monad-nft-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = McpServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
