//! Error types and handling for the MCP server.
//!
//! Per-invocation failures never reach this type: tools catch them at
//! their boundary and convert them into text results. What remains here
//! are the fatal conditions raised during startup.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal server errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("Missing THIRDWEB_CLIENT_ID in env");
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing THIRDWEB_CLIENT_ID in env"
        );
    }

    #[test]
    fn test_internal_error_display() {
        let err = Error::internal("client build failed");
        assert_eq!(err.to_string(), "Internal error: client build failed");
    }
}
