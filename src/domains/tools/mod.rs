//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool is a read-only query against an upstream NFT market API that
//! returns a single text content block.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry (names and metadata)
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, execute(), to_tool() and create_route()
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//! 5. Register in `registry.rs`
//!
//! The router is built dynamically; `server.rs` never changes.

pub mod definitions;
mod registry;
pub mod router;

pub use definitions::common::build_http_client;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
