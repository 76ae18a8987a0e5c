//! Error types for backend client operations.
//!
//! The taxonomy is deliberately coarse: every transport failure and every
//! non-2xx status collapses into [`ApiError::BackendUnavailable`] (the
//! client does not distinguish 4xx from 5xx), while a body that fails to
//! parse as the expected JSON shape is the distinct
//! [`ApiError::MalformedResponse`].

use thiserror::Error;

/// Errors that can occur while talking to the library backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure or non-2xx HTTP status.
    #[error("backend unavailable during {operation}: {detail}")]
    BackendUnavailable {
        /// The operation that failed (e.g. "get_books").
        operation: &'static str,
        /// Human-readable failure detail for logs and notifications.
        detail: String,
    },

    /// The backend answered 2xx but the body did not parse as the
    /// expected structure.
    #[error("malformed response from {operation}: {detail}")]
    MalformedResponse {
        /// The operation whose response failed to parse.
        operation: &'static str,
        /// Parser diagnostic.
        detail: String,
    },

    /// Locally detected configuration problem (invalid base URL, HTTP
    /// client construction failure). Never caused by the backend.
    #[error("invalid client configuration: {detail}")]
    Configuration {
        /// What was wrong with the configuration.
        detail: String,
    },
}

impl ApiError {
    /// Creates a backend-unavailable error.
    pub fn backend_unavailable(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            operation,
            detail: detail.into(),
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed_response(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedResponse {
            operation,
            detail: detail.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration {
            detail: detail.into(),
        }
    }

    /// True when retrying the same request later could succeed (the
    /// backend was unreachable or unhappy, as opposed to a local
    /// configuration problem).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::BackendUnavailable { .. } | Self::MalformedResponse { .. }
        )
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because the
// variants require the operation name for context, which the source error
// does not carry. Call sites use the helper constructors instead.
