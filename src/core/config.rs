//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support via dotenvy). The ThirdWeb
//! client id is the one required value: without it the process refuses to
//! start.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Chain id for the Monad testnet.
pub const MONAD_TESTNET_CHAIN_ID: u64 = 10143;

/// Default domain for the ThirdWeb Insight API (prefixed by the chain id).
pub const DEFAULT_INSIGHT_DOMAIN: &str = "insight.thirdweb.com";

/// Default base URL for the Magic Eden RTP API on Monad testnet.
pub const DEFAULT_MAGICEDEN_BASE_URL: &str =
    "https://api-mainnet.magiceden.dev/v3/rtp/monad-testnet";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Upstream API endpoint configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// ThirdWeb client id sent as the `x-client-id` header on Insight
    /// requests. Required; loading fails when it is absent.
    pub thirdweb_client_id: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("thirdweb_client_id", &"[REDACTED]")
            .finish()
    }
}

/// Upstream API endpoints and request behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// EVM chain id used to address the Insight API host.
    pub chain_id: u64,

    /// Domain of the ThirdWeb Insight API; the full host is
    /// `{chain_id}.{insight_domain}`.
    pub insight_domain: String,

    /// Base URL of the Magic Eden RTP API for the target chain.
    pub magiceden_base_url: String,

    /// Per-request timeout applied to the shared HTTP client, in seconds.
    pub request_timeout_secs: u64,
}

impl UpstreamConfig {
    /// Endpoint listing the owner addresses of an NFT contract.
    pub fn owners_url(&self, contract_address: &str) -> String {
        format!(
            "https://{}.{}/v1/nfts/owners/{}",
            self.chain_id, self.insight_domain, contract_address
        )
    }

    /// Endpoint listing trending collections by sales.
    pub fn trending_url(&self) -> String {
        format!("{}/collections/trending/v1", self.magiceden_base_url)
    }

    /// Endpoint listing the collections owned by a user.
    pub fn user_collections_url(&self, address: &str) -> String {
        format!("{}/users/{}/collections/v3", self.magiceden_base_url, address)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            chain_id: MONAD_TESTNET_CHAIN_ID,
            insight_domain: DEFAULT_INSIGHT_DOMAIN.to_string(),
            magiceden_base_url: DEFAULT_MAGICEDEN_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "monad-nft-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig {
                thirdweb_client_id: String::new(),
            },
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional variables are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`). `THIRDWEB_CLIENT_ID` is required: a missing client
    /// id is a fatal configuration error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        config.credentials.thirdweb_client_id = std::env::var("THIRDWEB_CLIENT_ID")
            .map_err(|_| Error::config("Missing THIRDWEB_CLIENT_ID in env"))?;

        if let Ok(chain_id) = std::env::var("MCP_CHAIN_ID") {
            config.upstream.chain_id = chain_id
                .parse()
                .map_err(|_| Error::config(format!("Invalid MCP_CHAIN_ID: {chain_id}")))?;
        }

        if let Ok(domain) = std::env::var("MCP_INSIGHT_DOMAIN") {
            config.upstream.insight_domain = domain;
        }

        if let Ok(base_url) = std::env::var("MCP_MAGICEDEN_BASE_URL") {
            config.upstream.magiceden_base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("MCP_REQUEST_TIMEOUT_SECS") {
            config.upstream.request_timeout_secs = timeout.parse().map_err(|_| {
                Error::config(format!("Invalid MCP_REQUEST_TIMEOUT_SECS: {timeout}"))
            })?;
        }

        info!(
            "Configuration loaded (chain id {}, timeout {}s)",
            config.upstream.chain_id, config.upstream.request_timeout_secs
        );

        Ok(config)
    }
}
