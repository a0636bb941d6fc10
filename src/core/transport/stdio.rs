//! STDIO transport.
//!
//! Serves MCP over stdin/stdout, the usual mode for hosts that spawn this
//! server as a child process. All logging goes to stderr, keeping the
//! protocol stream clean.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve MCP on stdin/stdout until the host closes the stream.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Serving {} on stdin/stdout", server.name());

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("stdio session closed");
        Ok(())
    }
}
