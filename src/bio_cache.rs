//! Per-session memoization of author biographies.
//!
//! Biography lookups hit a scraping backend, so repeated opens of the same
//! author must not repeat the network round trip. The cache is an explicit
//! object owned by the session (tests construct a fresh one per case), not
//! a hidden process global.

use std::collections::HashMap;

use tracing::debug;

use crate::client::{ApiClient, ApiError};
use crate::model::AuthorBio;

/// Process-lifetime store of author biographies keyed by author name.
///
/// Keys are exact strings: case-sensitive, no whitespace normalization.
/// `"Jane Doe"` and `"jane doe"` are distinct entries (preserved behavior;
/// see DESIGN.md). Entries are never invalidated or refreshed.
#[derive(Debug, Default)]
pub struct AuthorBioCache {
    entries: HashMap<String, AuthorBio>,
}

impl AuthorBioCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached authors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a cached entry without touching the network.
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&AuthorBio> {
        self.entries.get(name)
    }

    /// Returns the biography for `name`, fetching it on first lookup.
    ///
    /// A hit returns the stored entry with no network access. A miss
    /// performs the backend fetch and stores the result - including the
    /// negative no-biography sentinel, so authors with nothing available
    /// do not hit the network again. A fetch failure is surfaced and NOT
    /// cached; the next lookup for the same name retries.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiError`] from the underlying fetch on a cache miss.
    pub async fn get_or_fetch(
        &mut self,
        client: &ApiClient,
        name: &str,
    ) -> Result<AuthorBio, ApiError> {
        if let Some(entry) = self.entries.get(name) {
            debug!(author = name, "author bio cache hit");
            return Ok(entry.clone());
        }

        debug!(author = name, "author bio cache miss, fetching");
        let entry = client.fetch_author_bio(name).await?;
        self.entries.insert(name.to_string(), entry.clone());
        Ok(entry)
    }
}
