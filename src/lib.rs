//! Monad NFT MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing
//! read-only NFT market data tools for the Monad testnet, backed by the
//! ThirdWeb Insight and Magic Eden APIs.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The four MCP tools (owner enumeration, trending
//!     collections, user collections, portfolio value)
//!
//! # Example
//!
//! ```rust,no_run
//! use monad_nft_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
