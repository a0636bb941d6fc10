//! Common utilities shared across the NFT market tools.
//!
//! This module provides the upstream fetch error type, result helpers,
//! address validation, and construction of the shared HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use rmcp::model::{CallToolResult, Content};
use thiserror::Error;
use tracing::warn;

use crate::core::config::UpstreamConfig;

/// Length of a 0x-prefixed EVM address: "0x" plus 40 hex digits.
const EVM_ADDRESS_LENGTH: usize = 42;

/// Recoverable errors from the upstream fetch layer.
///
/// These are expected per-invocation failures: every tool catches them at
/// its boundary and converts them into a text result. They are distinct
/// from fatal startup errors (`core::Error::Config`).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream API answered with a non-success HTTP status.
    #[error("{api} API error: {status} {reason}")]
    Status {
        api: &'static str,
        status: u16,
        reason: String,
    },

    /// The request failed before a usable response was produced: connection
    /// failure, timeout, or a body that is not valid JSON for the expected
    /// shape.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Create a status error from a reqwest status code.
    pub fn from_status(api: &'static str, status: StatusCode) -> Self {
        Self::Status {
            api,
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

/// Build the HTTP client shared by all tool routes.
///
/// The configured per-request timeout applies to every upstream call,
/// including each page of a paginated fetch.
pub fn build_http_client(config: &UpstreamConfig) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
}

/// Check if a string is a 0x-prefixed, 40-hex-digit EVM address.
pub fn is_evm_address(value: &str) -> bool {
    value.len() == EVM_ADDRESS_LENGTH
        && value.starts_with("0x")
        && value[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}
