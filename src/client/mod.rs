//! HTTP client for the library backend service.
//!
//! Every operation is a single request/response exchange: no retries, no
//! backoff, no caching at this layer. The backend stores the library and
//! proxies catalog search and metadata lookups; this module only speaks
//! its JSON contract.
//!
//! # Architecture
//!
//! - [`ApiClient`] - handle owning the `reqwest` client and base URL
//! - [`ApiError`] - coarse failure taxonomy shared by all operations
//! - `library` - library CRUD operations (`/api/get_books`, `/api/add_book`, ...)
//! - `catalog` - external catalog search (`/search_books`)
//! - `metadata` - quote, author biography, and book summary lookups
//!
//! # Example
//!
//! ```no_run
//! use librarian_core::client::ApiClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new()?;
//! let library = client.get_books().await?;
//! println!("{} books in the library", library.len());
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod http;
mod library;
mod metadata;

pub use error::ApiError;
pub use http::default_user_agent;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Default backend base URL when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV_VAR: &str = "LIBRARIAN_API_URL";

/// Resolves the backend base URL from an explicit override, the
/// environment, or the fixed local default, in that order.
#[must_use]
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.trim().to_string();
    }
    std::env::var(API_URL_ENV_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Handle for all backend operations.
///
/// Cheap to clone is not a goal; one client lives for the whole session.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the configured base URL
    /// (`LIBRARIAN_API_URL` or the local default).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base URL is invalid or
    /// HTTP client construction fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(resolve_api_url(None))
    }

    /// Creates a client against a specific base URL (also used by tests
    /// pointing at a mock server).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the base URL is invalid or
    /// HTTP client construction fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let parsed = Url::parse(&base_url)
            .map_err(|error| ApiError::configuration(format!("invalid base URL: {error}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::configuration(format!(
                "unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            client: http::build_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this client talks to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET and parses the JSON body.
    ///
    /// `path_and_query` must start with `/` and carry any query string
    /// already percent-encoded.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path_and_query: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        self.execute(operation, self.client.get(&url)).await
    }

    /// Issues a request with a JSON body and parses the JSON response.
    ///
    /// Used by the mutating operations; `Content-Type: application/json`
    /// is set by the body serializer.
    pub(crate) async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(operation, self.client.request(method, &url).json(body))
            .await
    }

    /// Issues a body-less request (DELETE) and parses the JSON response.
    pub(crate) async fn send_empty<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        method: reqwest::Method,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.execute(operation, self.client.request(method, &url))
            .await
    }

    /// Sends a prepared request and applies the shared response policy:
    /// transport failures and every non-2xx status (4xx deliberately not
    /// distinguished from 5xx) become `BackendUnavailable`, an unparsable
    /// 2xx body becomes `MalformedResponse`.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(operation, "calling backend");

        let response = request.send().await.map_err(|error| {
            warn!(%error, operation, "backend request failed");
            ApiError::backend_unavailable(operation, format!("request failed: {error}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), operation, "backend error status");
            return Err(ApiError::backend_unavailable(
                operation,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response.json::<T>().await.map_err(|error| {
            warn!(%error, operation, "failed to parse backend response");
            ApiError::malformed_response(operation, error.to_string())
        })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Server acknowledgement for mutating operations.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct AckMessage {
    pub message: String,
}
