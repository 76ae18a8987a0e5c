//! Shared HTTP client construction policy.
//!
//! Centralizes networking defaults so every backend operation stays
//! consistent on timeout, user-agent, and compression.

use std::time::Duration;

use reqwest::Client;

use super::ApiError;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const READ_TIMEOUT_SECS: u64 = 30;

/// The user-agent sent with every backend request.
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "librarian/{} (personal library client)",
        env!("CARGO_PKG_VERSION")
    )
}

/// Builds the backend HTTP client using shared project policy.
///
/// # Errors
///
/// Returns [`ApiError::Configuration`] when client construction fails.
pub fn build_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(READ_TIMEOUT_SECS))
        .user_agent(default_user_agent())
        .gzip(true)
        .build()
        .map_err(|error| {
            ApiError::configuration(format!("HTTP client construction failed: {error}"))
        })
}
